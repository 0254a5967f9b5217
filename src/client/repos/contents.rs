use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation for the contents endpoints
// https://docs.github.com/rest/repos/contents
impl RepositoryClient {
    /// Get repository content
    ///
    /// `path` goes into the route verbatim, slashes included.
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#get-repository-content
    pub async fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/contents/{path}",
                params,
                params! { "owner" => owner, "repo" => repo, "path" => path },
            )
            .await
    }

    /// Create or update file contents
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#create-or-update-file-contents
    pub async fn create_or_update_file_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/contents/{path}",
                params,
                params! { "owner" => owner, "repo" => repo, "path" => path },
            )
            .await
    }

    /// Delete a file
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#delete-a-file
    pub async fn delete_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/contents/{path}",
                params,
                params! { "owner" => owner, "repo" => repo, "path" => path },
            )
            .await
    }

    /// Get a repository README
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#get-a-repository-readme
    pub async fn get_readme(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/readme",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository README for a directory
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#get-a-repository-readme-for-a-directory
    pub async fn get_readme_in_directory(
        &self,
        owner: &str,
        repo: &str,
        dir: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/readme/{dir}",
                params,
                params! { "owner" => owner, "repo" => repo, "dir" => dir },
            )
            .await
    }

    /// Download a repository archive (tar)
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#download-a-repository-archive-tar
    pub async fn download_tarball_archive(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/tarball/{ref}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// Download a repository archive (zip)
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#download-a-repository-archive-zip
    pub async fn download_zipball_archive(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/zipball/{ref}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `GitClient` handles communication with the git related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/git
#[derive(Clone, Debug)]
pub struct GitClient {
    inner: Client,
}

impl GitClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Create a blob
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/blobs#create-a-blob
    pub async fn create_blob(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/git/blobs",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a blob
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/blobs#get-a-blob
    pub async fn get_blob(&self, owner: &str, repo: &str, file_sha: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/git/blobs/{file_sha}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "file_sha" => file_sha },
            )
            .await
    }

    // Commits
    // https://docs.github.com/rest/git/commits

    /// Create a commit
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/commits#create-a-commit
    pub async fn create_commit(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/git/commits",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a commit object
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/commits#get-a-commit-object
    pub async fn get_commit(&self, owner: &str, repo: &str, commit_sha: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/git/commits/{commit_sha}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "commit_sha" => commit_sha },
            )
            .await
    }

    // Refs
    // https://docs.github.com/rest/git/refs

    /// List matching references
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#list-matching-references
    pub async fn list_matching_refs(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/git/matching-refs/{ref}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// Get a reference
    ///
    /// `git_ref` is in the form `heads/<branch name>` or `tags/<tag name>`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#get-a-reference
    pub async fn get_ref(&self, owner: &str, repo: &str, git_ref: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/git/ref/{ref}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// Create a reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#create-a-reference
    pub async fn create_ref(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/git/refs",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Update a reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#update-a-reference
    pub async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/git/refs/{ref}",
                params,
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// Delete a reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#delete-a-reference
    pub async fn delete_ref(&self, owner: &str, repo: &str, git_ref: &str) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/git/refs/{ref}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    // Tags
    // https://docs.github.com/rest/git/tags

    /// Create a tag object
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/tags#create-a-tag-object
    pub async fn create_tag(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/git/tags",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a tag
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/tags#get-a-tag
    pub async fn get_tag(&self, owner: &str, repo: &str, tag_sha: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/git/tags/{tag_sha}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "tag_sha" => tag_sha },
            )
            .await
    }

    // Trees
    // https://docs.github.com/rest/git/trees

    /// Create a tree
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/trees#create-a-tree
    pub async fn create_tree(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/git/trees",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a tree
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/trees#get-a-tree
    pub async fn get_tree(
        &self,
        owner: &str,
        repo: &str,
        tree_sha: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/git/trees/{tree_sha}",
                params,
                params! { "owner" => owner, "repo" => repo, "tree_sha" => tree_sha },
            )
            .await
    }
}

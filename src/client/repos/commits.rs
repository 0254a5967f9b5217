use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation for the commits endpoints
// https://docs.github.com/rest/commits/commits
impl RepositoryClient {
    /// List commits
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/commits#list-commits
    pub async fn list_commits(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a commit
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/commits#get-a-commit
    pub async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits/{ref}",
                params,
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// Compare two commits
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/commits#compare-two-commits
    pub async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        basehead: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/compare/{basehead}",
                params,
                params! { "owner" => owner, "repo" => repo, "basehead" => basehead },
            )
            .await
    }

    /// List pull requests associated with a commit
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/commits#list-pull-requests-associated-with-a-commit
    pub async fn list_pull_requests_associated_with_commit(
        &self,
        owner: &str,
        repo: &str,
        commit_sha: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits/{commit_sha}/pulls",
                params,
                params! { "owner" => owner, "repo" => repo, "commit_sha" => commit_sha },
            )
            .await
    }

    // Comments
    // https://docs.github.com/rest/commits/comments

    /// List commit comments for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/comments#list-commit-comments-for-a-repository
    pub async fn list_commit_comments_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/comments",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/comments#get-a-commit-comment
    pub async fn get_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/comments/{comment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Update a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/comments#update-a-commit-comment
    pub async fn update_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/comments/{comment_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Delete a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/comments#delete-a-commit-comment
    pub async fn delete_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/comments/{comment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// List commit comments
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/comments#list-commit-comments
    pub async fn list_comments_for_commit(
        &self,
        owner: &str,
        repo: &str,
        commit_sha: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits/{commit_sha}/comments",
                params,
                params! { "owner" => owner, "repo" => repo, "commit_sha" => commit_sha },
            )
            .await
    }

    /// Create a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/comments#create-a-commit-comment
    pub async fn create_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        commit_sha: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/commits/{commit_sha}/comments",
                params,
                params! { "owner" => owner, "repo" => repo, "commit_sha" => commit_sha },
            )
            .await
    }
}

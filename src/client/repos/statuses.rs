use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation for the status endpoint
// https://docs.github.com/rest/commits/statuses
impl RepositoryClient {
    /// List commit statuses for a reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/statuses#list-commit-statuses-for-a-reference
    pub async fn list_commit_statuses_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits/{ref}/statuses",
                params,
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// Get the combined status for a specific reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/statuses#get-the-combined-status-for-a-specific-reference
    pub async fn get_combined_status_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits/{ref}/status",
                params,
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// Create a commit status
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/statuses#create-a-commit-status
    pub async fn create_commit_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/statuses/{sha}",
                params,
                params! { "owner" => owner, "repo" => repo, "sha" => sha },
            )
            .await
    }
}

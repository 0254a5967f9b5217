use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation for the webhooks endpoints
// https://docs.github.com/rest/repos/webhooks
impl RepositoryClient {
    /// List repository webhooks
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/webhooks#list-repository-webhooks
    pub async fn list_webhooks(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/hooks",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a repository webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/webhooks#create-a-repository-webhook
    pub async fn create_webhook(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/hooks",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/webhooks#get-a-repository-webhook
    pub async fn get_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/hooks/{hook_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "hook_id" => hook_id },
            )
            .await
    }

    /// Update a repository webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/webhooks#update-a-repository-webhook
    pub async fn update_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/hooks/{hook_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "hook_id" => hook_id },
            )
            .await
    }

    /// Delete a repository webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/webhooks#delete-a-repository-webhook
    pub async fn delete_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/hooks/{hook_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "hook_id" => hook_id },
            )
            .await
    }

    /// Ping a repository webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/webhooks#ping-a-repository-webhook
    pub async fn ping_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/hooks/{hook_id}/pings",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "hook_id" => hook_id },
            )
            .await
    }

    /// Test the push repository webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/webhooks#test-the-push-repository-webhook
    pub async fn test_push_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/hooks/{hook_id}/tests",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "hook_id" => hook_id },
            )
            .await
    }
}

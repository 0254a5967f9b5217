use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation for the deployments endpoints
// https://docs.github.com/rest/deployments/deployments
impl RepositoryClient {
    /// List deployments
    ///
    /// GitHub API docs: https://docs.github.com/rest/deployments/deployments#list-deployments
    pub async fn list_deployments(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/deployments",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a deployment
    ///
    /// GitHub API docs: https://docs.github.com/rest/deployments/deployments#create-a-deployment
    pub async fn create_deployment(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/deployments",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a deployment
    ///
    /// GitHub API docs: https://docs.github.com/rest/deployments/deployments#get-a-deployment
    pub async fn get_deployment(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/deployments/{deployment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "deployment_id" => deployment_id },
            )
            .await
    }

    /// Delete a deployment
    ///
    /// GitHub API docs: https://docs.github.com/rest/deployments/deployments#delete-a-deployment
    pub async fn delete_deployment(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/deployments/{deployment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "deployment_id" => deployment_id },
            )
            .await
    }

    // Statuses
    // https://docs.github.com/rest/deployments/statuses

    /// List deployment statuses
    ///
    /// GitHub API docs: https://docs.github.com/rest/deployments/statuses#list-deployment-statuses
    pub async fn list_deployment_statuses(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/deployments/{deployment_id}/statuses",
                params,
                params! { "owner" => owner, "repo" => repo, "deployment_id" => deployment_id },
            )
            .await
    }

    /// Create a deployment status
    ///
    /// GitHub API docs: https://docs.github.com/rest/deployments/statuses#create-a-deployment-status
    pub async fn create_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/deployments/{deployment_id}/statuses",
                params,
                params! { "owner" => owner, "repo" => repo, "deployment_id" => deployment_id },
            )
            .await
    }

    /// Get a deployment status
    ///
    /// GitHub API docs: https://docs.github.com/rest/deployments/statuses#get-a-deployment-status
    pub async fn get_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        status_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/deployments/{deployment_id}/statuses/{status_id}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "deployment_id" => deployment_id,
                    "status_id" => status_id,
                },
            )
            .await
    }
}

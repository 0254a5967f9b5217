use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `DependabotClient` handles communication with the dependabot related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/dependabot
#[derive(Clone, Debug)]
pub struct DependabotClient {
    inner: Client,
}

impl DependabotClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List Dependabot alerts for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/alerts#list-dependabot-alerts-for-an-organization
    pub async fn list_alerts_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/dependabot/alerts", params, params! { "org" => org })
            .await
    }

    /// List Dependabot alerts for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/alerts#list-dependabot-alerts-for-a-repository
    pub async fn list_alerts_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/dependabot/alerts",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a Dependabot alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/alerts#get-a-dependabot-alert
    pub async fn get_alert(&self, owner: &str, repo: &str, alert_number: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/dependabot/alerts/{alert_number}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }

    /// Update a Dependabot alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/alerts#update-a-dependabot-alert
    pub async fn update_alert(
        &self,
        owner: &str,
        repo: &str,
        alert_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/dependabot/alerts/{alert_number}",
                params,
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }

    // Secrets
    // https://docs.github.com/rest/dependabot/secrets

    /// List repository secrets
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/secrets#list-repository-secrets
    pub async fn list_repo_secrets(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/dependabot/secrets",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository public key
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/secrets#get-a-repository-public-key
    pub async fn get_repo_public_key(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/dependabot/secrets/public-key",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository secret
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/secrets#get-a-repository-secret
    pub async fn get_repo_secret(
        &self,
        owner: &str,
        repo: &str,
        secret_name: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/dependabot/secrets/{secret_name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "secret_name" => secret_name },
            )
            .await
    }

    /// Create or update a repository secret
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/secrets#create-or-update-a-repository-secret
    pub async fn create_or_update_repo_secret(
        &self,
        owner: &str,
        repo: &str,
        secret_name: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/dependabot/secrets/{secret_name}",
                params,
                params! { "owner" => owner, "repo" => repo, "secret_name" => secret_name },
            )
            .await
    }

    /// Delete a repository secret
    ///
    /// GitHub API docs: https://docs.github.com/rest/dependabot/secrets#delete-a-repository-secret
    pub async fn delete_repo_secret(
        &self,
        owner: &str,
        repo: &str,
        secret_name: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/dependabot/secrets/{secret_name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "secret_name" => secret_name },
            )
            .await
    }
}

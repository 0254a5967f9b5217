use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `SecretScanningClient` handles communication with the secret scanning related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/secret-scanning
#[derive(Clone, Debug)]
pub struct SecretScanningClient {
    inner: Client,
}

impl SecretScanningClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List secret scanning alerts for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/secret-scanning/secret-scanning#list-secret-scanning-alerts-for-an-organization
    pub async fn list_alerts_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/secret-scanning/alerts", params, params! { "org" => org })
            .await
    }

    /// List secret scanning alerts for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/secret-scanning/secret-scanning#list-secret-scanning-alerts-for-a-repository
    pub async fn list_alerts_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/secret-scanning/alerts",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a secret scanning alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/secret-scanning/secret-scanning#get-a-secret-scanning-alert
    pub async fn get_alert(&self, owner: &str, repo: &str, alert_number: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/secret-scanning/alerts/{alert_number}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }

    /// Update a secret scanning alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/secret-scanning/secret-scanning#update-a-secret-scanning-alert
    pub async fn update_alert(
        &self,
        owner: &str,
        repo: &str,
        alert_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/secret-scanning/alerts/{alert_number}",
                params,
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }

    /// List locations for a secret scanning alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/secret-scanning/secret-scanning#list-locations-for-a-secret-scanning-alert
    pub async fn list_locations_for_alert(
        &self,
        owner: &str,
        repo: &str,
        alert_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/secret-scanning/alerts/{alert_number}/locations",
                params,
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }
}

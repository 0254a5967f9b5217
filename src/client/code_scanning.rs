use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `CodeScanningClient` handles communication with the code scanning related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/code-scanning
#[derive(Clone, Debug)]
pub struct CodeScanningClient {
    inner: Client,
}

impl CodeScanningClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List code scanning alerts for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#list-code-scanning-alerts-for-an-organization
    pub async fn list_alerts_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/code-scanning/alerts", params, params! { "org" => org })
            .await
    }

    /// List code scanning alerts for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#list-code-scanning-alerts-for-a-repository
    pub async fn list_alerts_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/code-scanning/alerts",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a code scanning alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#get-a-code-scanning-alert
    pub async fn get_alert(&self, owner: &str, repo: &str, alert_number: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/code-scanning/alerts/{alert_number}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }

    /// Update a code scanning alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#update-a-code-scanning-alert
    pub async fn update_alert(
        &self,
        owner: &str,
        repo: &str,
        alert_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/code-scanning/alerts/{alert_number}",
                params,
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }

    /// List instances of a code scanning alert
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#list-instances-of-a-code-scanning-alert
    pub async fn list_alert_instances(
        &self,
        owner: &str,
        repo: &str,
        alert_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/code-scanning/alerts/{alert_number}/instances",
                params,
                params! { "owner" => owner, "repo" => repo, "alert_number" => alert_number },
            )
            .await
    }

    /// List code scanning analyses for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#list-code-scanning-analyses-for-a-repository
    pub async fn list_recent_analyses(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/code-scanning/analyses",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a code scanning analysis for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#get-a-code-scanning-analysis-for-a-repository
    pub async fn get_analysis(
        &self,
        owner: &str,
        repo: &str,
        analysis_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/code-scanning/analyses/{analysis_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "analysis_id" => analysis_id },
            )
            .await
    }

    /// Delete a code scanning analysis from a repository
    ///
    /// `confirm_delete` is sent in the query string.
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#delete-a-code-scanning-analysis-from-a-repository
    pub async fn delete_analysis(
        &self,
        owner: &str,
        repo: &str,
        analysis_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .delete_with_query(
                "/repos/{owner}/{repo}/code-scanning/analyses/{analysis_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "analysis_id" => analysis_id },
            )
            .await
    }

    /// Upload an analysis as SARIF data
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#upload-an-analysis-as-sarif-data
    pub async fn upload_sarif(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/code-scanning/sarifs",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get information about a SARIF upload
    ///
    /// GitHub API docs: https://docs.github.com/rest/code-scanning/code-scanning#get-information-about-a-sarif-upload
    pub async fn get_sarif(&self, owner: &str, repo: &str, sarif_id: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/code-scanning/sarifs/{sarif_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "sarif_id" => sarif_id },
            )
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `BillingClient` handles communication with the billing related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/billing
#[derive(Clone, Debug)]
pub struct BillingClient {
    inner: Client,
}

impl BillingClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get GitHub Actions billing for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/billing/billing#get-github-actions-billing-for-an-organization
    pub async fn get_github_actions_billing_org(&self, org: &str) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/settings/billing/actions", Params::new(), params! { "org" => org })
            .await
    }

    /// Get GitHub Packages billing for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/billing/billing#get-github-packages-billing-for-an-organization
    pub async fn get_github_packages_billing_org(&self, org: &str) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/settings/billing/packages", Params::new(), params! { "org" => org })
            .await
    }

    /// Get shared storage billing for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/billing/billing#get-shared-storage-billing-for-an-organization
    pub async fn get_shared_storage_billing_org(&self, org: &str) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/settings/billing/shared-storage",
                Params::new(),
                params! { "org" => org },
            )
            .await
    }

    /// Get GitHub Actions billing for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/billing/billing#get-github-actions-billing-for-a-user
    pub async fn get_github_actions_billing_user(&self, username: &str) -> Result<Response> {
        self.inner
            .get(
                "/users/{username}/settings/billing/actions",
                Params::new(),
                params! { "username" => username },
            )
            .await
    }

    /// Get GitHub Packages billing for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/billing/billing#get-github-packages-billing-for-a-user
    pub async fn get_github_packages_billing_user(&self, username: &str) -> Result<Response> {
        self.inner
            .get(
                "/users/{username}/settings/billing/packages",
                Params::new(),
                params! { "username" => username },
            )
            .await
    }

    /// Get shared storage billing for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/billing/billing#get-shared-storage-billing-for-a-user
    pub async fn get_shared_storage_billing_user(&self, username: &str) -> Result<Response> {
        self.inner
            .get(
                "/users/{username}/settings/billing/shared-storage",
                Params::new(),
                params! { "username" => username },
            )
            .await
    }
}

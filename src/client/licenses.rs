use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `LicensesClient` handles communication with the licenses related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/licenses
#[derive(Clone, Debug)]
pub struct LicensesClient {
    inner: Client,
}

impl LicensesClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get all commonly used licenses
    ///
    /// GitHub API docs: https://docs.github.com/rest/licenses/licenses#get-all-commonly-used-licenses
    pub async fn get_all_commonly_used(&self, params: Params) -> Result<Response> {
        self.inner.get("/licenses", params, Params::new()).await
    }

    /// Get a license
    ///
    /// GitHub API docs: https://docs.github.com/rest/licenses/licenses#get-a-license
    pub async fn get(&self, license: &str) -> Result<Response> {
        self.inner
            .get("/licenses/{license}", Params::new(), params! { "license" => license })
            .await
    }

    /// Get the license for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/licenses/licenses#get-the-license-for-a-repository
    pub async fn get_for_repo(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/license",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }
}

use crate::client::{Client, Params, Response, Result};

/// `MetaClient` handles communication with the meta related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/meta
#[derive(Clone, Debug)]
pub struct MetaClient {
    inner: Client,
}

impl MetaClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// GitHub API Root
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#github-api-root
    pub async fn root(&self) -> Result<Response> {
        self.inner.get("/", Params::new(), Params::new()).await
    }

    /// Get GitHub meta information
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#get-github-meta-information
    pub async fn get(&self) -> Result<Response> {
        self.inner.get("/meta", Params::new(), Params::new()).await
    }

    /// Get Octocat
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#get-octocat
    pub async fn get_octocat(&self, params: Params) -> Result<Response> {
        self.inner.get("/octocat", params, Params::new()).await
    }

    /// Get all API versions
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#get-all-api-versions
    pub async fn get_all_versions(&self) -> Result<Response> {
        self.inner
            .get("/versions", Params::new(), Params::new())
            .await
    }

    /// Get the Zen of GitHub
    ///
    /// Plain text body.
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#get-the-zen-of-github
    pub async fn get_zen(&self) -> Result<Response> {
        self.inner.get("/zen", Params::new(), Params::new()).await
    }
}

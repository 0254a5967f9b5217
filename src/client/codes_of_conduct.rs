use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `CodesOfConductClient` handles communication with the codes of conduct related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/codes-of-conduct
#[derive(Clone, Debug)]
pub struct CodesOfConductClient {
    inner: Client,
}

impl CodesOfConductClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get all codes of conduct
    ///
    /// GitHub API docs: https://docs.github.com/rest/codes-of-conduct/codes-of-conduct#get-all-codes-of-conduct
    pub async fn get_all_codes_of_conduct(&self) -> Result<Response> {
        self.inner
            .get("/codes_of_conduct", Params::new(), Params::new())
            .await
    }

    /// Get a code of conduct
    ///
    /// GitHub API docs: https://docs.github.com/rest/codes-of-conduct/codes-of-conduct#get-a-code-of-conduct
    pub async fn get_conduct_code(&self, key: &str) -> Result<Response> {
        self.inner
            .get("/codes_of_conduct/{key}", Params::new(), params! { "key" => key })
            .await
    }
}

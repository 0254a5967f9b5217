use crate::client::{Client, Params, Response, Result};

/// `EmojisClient` handles communication with the emojis related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/emojis
#[derive(Clone, Debug)]
pub struct EmojisClient {
    inner: Client,
}

impl EmojisClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get emojis
    ///
    /// GitHub API docs: https://docs.github.com/rest/emojis/emojis#get-emojis
    pub async fn get(&self) -> Result<Response> {
        self.inner
            .get("/emojis", Params::new(), Params::new())
            .await
    }
}

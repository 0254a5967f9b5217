use crate::client::{Client, Params, Response, Result};

/// `MarkdownClient` handles communication with the markdown related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/markdown
#[derive(Clone, Debug)]
pub struct MarkdownClient {
    inner: Client,
}

impl MarkdownClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Render a Markdown document
    ///
    /// The body of the response is HTML, read it with [`Response::text`].
    ///
    /// GitHub API docs: https://docs.github.com/rest/markdown/markdown#render-a-markdown-document
    pub async fn render(&self, params: Params) -> Result<Response> {
        self.inner.post("/markdown", params, Params::new()).await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `GitignoreClient` handles communication with the gitignore related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/gitignore
#[derive(Clone, Debug)]
pub struct GitignoreClient {
    inner: Client,
}

impl GitignoreClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get all gitignore templates
    ///
    /// GitHub API docs: https://docs.github.com/rest/gitignore/gitignore#get-all-gitignore-templates
    pub async fn get_all_templates(&self) -> Result<Response> {
        self.inner
            .get("/gitignore/templates", Params::new(), Params::new())
            .await
    }

    /// Get a gitignore template
    ///
    /// GitHub API docs: https://docs.github.com/rest/gitignore/gitignore#get-a-gitignore-template
    pub async fn get_template(&self, name: &str) -> Result<Response> {
        self.inner
            .get("/gitignore/templates/{name}", Params::new(), params! { "name" => name })
            .await
    }
}

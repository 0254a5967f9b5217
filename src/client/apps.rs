use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `AppsClient` handles communication with the apps related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/apps
#[derive(Clone, Debug)]
pub struct AppsClient {
    inner: Client,
}

impl AppsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get the authenticated app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#get-the-authenticated-app
    pub async fn get_authenticated(&self) -> Result<Response> {
        self.inner.get("/app", Params::new(), Params::new()).await
    }

    /// Get an app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#get-an-app
    pub async fn get_by_slug(&self, app_slug: &str) -> Result<Response> {
        self.inner
            .get("/apps/{app_slug}", Params::new(), params! { "app_slug" => app_slug })
            .await
    }

    /// List installations for the authenticated app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#list-installations-for-the-authenticated-app
    pub async fn list_installations(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/app/installations", params, Params::new())
            .await
    }

    /// Get an installation for the authenticated app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#get-an-installation-for-the-authenticated-app
    pub async fn get_installation(&self, installation_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/app/installations/{installation_id}",
                Params::new(),
                params! { "installation_id" => installation_id },
            )
            .await
    }

    /// Delete an installation for the authenticated app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#delete-an-installation-for-the-authenticated-app
    pub async fn delete_installation(&self, installation_id: u64) -> Result<Response> {
        self.inner
            .delete(
                "/app/installations/{installation_id}",
                Params::new(),
                params! { "installation_id" => installation_id },
            )
            .await
    }

    /// Get a repository installation for the authenticated app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#get-a-repository-installation-for-the-authenticated-app
    pub async fn get_repo_installation(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/installation",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get an organization installation for the authenticated app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#get-an-organization-installation-for-the-authenticated-app
    pub async fn get_org_installation(&self, org: &str) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/installation", Params::new(), params! { "org" => org })
            .await
    }

    /// Get a user installation for the authenticated app
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/apps#get-a-user-installation-for-the-authenticated-app
    pub async fn get_user_installation(&self, username: &str) -> Result<Response> {
        self.inner
            .get(
                "/users/{username}/installation",
                Params::new(),
                params! { "username" => username },
            )
            .await
    }

    // Installations
    // https://docs.github.com/rest/apps/installations

    /// List repositories accessible to the app installation
    ///
    /// GitHub API docs: https://docs.github.com/rest/apps/installations#list-repositories-accessible-to-the-app-installation
    pub async fn list_repos_accessible_to_installation(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/installation/repositories", params, Params::new())
            .await
    }
}

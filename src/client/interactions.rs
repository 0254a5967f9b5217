use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `InteractionsClient` handles communication with the interactions related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/interactions
#[derive(Clone, Debug)]
pub struct InteractionsClient {
    inner: Client,
}

impl InteractionsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get interaction restrictions for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/orgs#get-interaction-restrictions-for-an-organization
    pub async fn get_restrictions_for_org(&self, org: &str) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/interaction-limits", Params::new(), params! { "org" => org })
            .await
    }

    /// Set interaction restrictions for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/orgs#set-interaction-restrictions-for-an-organization
    pub async fn set_restrictions_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .put("/orgs/{org}/interaction-limits", params, params! { "org" => org })
            .await
    }

    /// Remove interaction restrictions for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/orgs#remove-interaction-restrictions-for-an-organization
    pub async fn remove_restrictions_for_org(&self, org: &str) -> Result<Response> {
        self.inner
            .delete("/orgs/{org}/interaction-limits", Params::new(), params! { "org" => org })
            .await
    }

    // Repos
    // https://docs.github.com/rest/interactions/repos

    /// Get interaction restrictions for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/repos#get-interaction-restrictions-for-a-repository
    pub async fn get_restrictions_for_repo(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/interaction-limits",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Set interaction restrictions for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/repos#set-interaction-restrictions-for-a-repository
    pub async fn set_restrictions_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/interaction-limits",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Remove interaction restrictions for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/repos#remove-interaction-restrictions-for-a-repository
    pub async fn remove_restrictions_for_repo(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/interaction-limits",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    // User
    // https://docs.github.com/rest/interactions/user

    /// Get interaction restrictions for your public repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/user#get-interaction-restrictions-for-your-public-repositories
    pub async fn get_restrictions_for_authenticated_user(&self) -> Result<Response> {
        self.inner
            .get("/user/interaction-limits", Params::new(), Params::new())
            .await
    }

    /// Set interaction restrictions for your public repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/user#set-interaction-restrictions-for-your-public-repositories
    pub async fn set_restrictions_for_authenticated_user(
        &self,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put("/user/interaction-limits", params, Params::new())
            .await
    }

    /// Remove interaction restrictions from your public repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/interactions/user#remove-interaction-restrictions-from-your-public-repositories
    pub async fn remove_restrictions_for_authenticated_user(&self) -> Result<Response> {
        self.inner
            .delete("/user/interaction-limits", Params::new(), Params::new())
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

mod branches;
mod collaborators;
mod commits;
mod contents;
mod deployments;
mod hooks;
mod releases;
mod statuses;

/// `RepositoryClient` handles communication with the repos related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/repos
#[derive(Clone, Debug)]
pub struct RepositoryClient {
    inner: Client,
}

impl RepositoryClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List organization repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-organization-repositories
    pub async fn list_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/repos", params, params! { "org" => org })
            .await
    }

    /// Create an organization repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#create-an-organization-repository
    pub async fn create_in_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .post("/orgs/{org}/repos", params, params! { "org" => org })
            .await
    }

    /// List repositories for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repositories-for-the-authenticated-user
    pub async fn list_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.get("/user/repos", params, Params::new()).await
    }

    /// Create a repository for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#create-a-repository-for-the-authenticated-user
    pub async fn create_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.post("/user/repos", params, Params::new()).await
    }

    /// List repositories for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repositories-for-a-user
    pub async fn list_for_user(&self, username: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/users/{username}/repos", params, params! { "username" => username })
            .await
    }

    /// List public repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-public-repositories
    pub async fn list_public(&self, params: Params) -> Result<Response> {
        self.inner.get("/repositories", params, Params::new()).await
    }

    /// Get a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#get-a-repository
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Update a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#update-a-repository
    pub async fn update(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .patch("/repos/{owner}/{repo}", params, params! { "owner" => owner, "repo" => repo })
            .await
    }

    /// Delete a repository
    ///
    /// Deleting a repository requires admin access.
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#delete-a-repository
    pub async fn delete(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List repository contributors
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repository-contributors
    pub async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/contributors",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List repository languages
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repository-languages
    pub async fn list_languages(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/languages",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List repository tags
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repository-tags
    pub async fn list_tags(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/repos/{owner}/{repo}/tags", params, params! { "owner" => owner, "repo" => repo })
            .await
    }

    /// List repository teams
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repository-teams
    pub async fn list_teams(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/teams",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get all repository topics
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#get-all-repository-topics
    pub async fn get_all_topics(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/topics",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Replace all repository topics
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#replace-all-repository-topics
    pub async fn replace_all_topics(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/topics",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Transfer a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#transfer-a-repository
    pub async fn transfer(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/transfer",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a repository using a template
    ///
    /// The template repository must have `is_template` set.
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#create-a-repository-using-a-template
    pub async fn create_using_template(
        &self,
        template_owner: &str,
        template_repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{template_owner}/{template_repo}/generate",
                params,
                params! { "template_owner" => template_owner, "template_repo" => template_repo },
            )
            .await
    }

    /// Create a repository dispatch event
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#create-a-repository-dispatch-event
    pub async fn create_dispatch_event(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/dispatches",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    // Forks
    // https://docs.github.com/rest/repos/forks

    /// List forks
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/forks#list-forks
    pub async fn list_forks(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/forks",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a fork
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/forks#create-a-fork
    pub async fn create_fork(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/forks",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }
}

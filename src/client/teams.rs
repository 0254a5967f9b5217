use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `TeamsClient` handles communication with the teams related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/teams
#[derive(Clone, Debug)]
pub struct TeamsClient {
    inner: Client,
}

impl TeamsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List teams
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#list-teams
    pub async fn list(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/teams", params, params! { "org" => org })
            .await
    }

    /// Create a team
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#create-a-team
    pub async fn create(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .post("/orgs/{org}/teams", params, params! { "org" => org })
            .await
    }

    /// Get a team by name
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#get-a-team-by-name
    pub async fn get_by_name(&self, org: &str, team_slug: &str) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/teams/{team_slug}",
                Params::new(),
                params! { "org" => org, "team_slug" => team_slug },
            )
            .await
    }

    /// Update a team
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#update-a-team
    pub async fn update_in_org(
        &self,
        org: &str,
        team_slug: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/orgs/{org}/teams/{team_slug}",
                params,
                params! { "org" => org, "team_slug" => team_slug },
            )
            .await
    }

    /// Delete a team
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#delete-a-team
    pub async fn delete_in_org(&self, org: &str, team_slug: &str) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/teams/{team_slug}",
                Params::new(),
                params! { "org" => org, "team_slug" => team_slug },
            )
            .await
    }

    /// List child teams
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#list-child-teams
    pub async fn list_child_in_org(
        &self,
        org: &str,
        team_slug: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/teams/{team_slug}/teams",
                params,
                params! { "org" => org, "team_slug" => team_slug },
            )
            .await
    }

    /// List team repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#list-team-repositories
    pub async fn list_repos_in_org(
        &self,
        org: &str,
        team_slug: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/teams/{team_slug}/repos",
                params,
                params! { "org" => org, "team_slug" => team_slug },
            )
            .await
    }

    /// Check team permissions for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#check-team-permissions-for-a-repository
    pub async fn check_permissions_for_repo_in_org(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}",
                Params::new(),
                params! {
                    "org" => org,
                    "team_slug" => team_slug,
                    "owner" => owner,
                    "repo" => repo,
                },
            )
            .await
    }

    /// Add or update team repository permissions
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#add-or-update-team-repository-permissions
    pub async fn add_or_update_repo_permissions_in_org(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}",
                params,
                params! {
                    "org" => org,
                    "team_slug" => team_slug,
                    "owner" => owner,
                    "repo" => repo,
                },
            )
            .await
    }

    /// Remove a repository from a team
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#remove-a-repository-from-a-team
    pub async fn remove_repo_in_org(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}",
                Params::new(),
                params! {
                    "org" => org,
                    "team_slug" => team_slug,
                    "owner" => owner,
                    "repo" => repo,
                },
            )
            .await
    }

    /// List teams for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/teams#list-teams-for-the-authenticated-user
    pub async fn list_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.get("/user/teams", params, Params::new()).await
    }

    // Members
    // https://docs.github.com/rest/teams/members

    /// List team members
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/members#list-team-members
    pub async fn list_members_in_org(
        &self,
        org: &str,
        team_slug: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/teams/{team_slug}/members",
                params,
                params! { "org" => org, "team_slug" => team_slug },
            )
            .await
    }

    /// Get team membership for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/members#get-team-membership-for-a-user
    pub async fn get_membership_for_user_in_org(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/teams/{team_slug}/memberships/{username}",
                Params::new(),
                params! { "org" => org, "team_slug" => team_slug, "username" => username },
            )
            .await
    }

    /// Add or update team membership for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/members#add-or-update-team-membership-for-a-user
    pub async fn add_or_update_membership_for_user_in_org(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/orgs/{org}/teams/{team_slug}/memberships/{username}",
                params,
                params! { "org" => org, "team_slug" => team_slug, "username" => username },
            )
            .await
    }

    /// Remove team membership for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/teams/members#remove-team-membership-for-a-user
    pub async fn remove_membership_for_user_in_org(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/teams/{team_slug}/memberships/{username}",
                Params::new(),
                params! { "org" => org, "team_slug" => team_slug, "username" => username },
            )
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `OrgsClient` handles communication with the orgs related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/orgs
#[derive(Clone, Debug)]
pub struct OrgsClient {
    inner: Client,
}

impl OrgsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List organizations
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#list-organizations
    pub async fn list(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/organizations", params, Params::new())
            .await
    }

    /// List organizations for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#list-organizations-for-the-authenticated-user
    pub async fn list_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.get("/user/orgs", params, Params::new()).await
    }

    /// List organizations for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#list-organizations-for-a-user
    pub async fn list_for_user(&self, username: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/users/{username}/orgs", params, params! { "username" => username })
            .await
    }

    /// Get an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#get-an-organization
    pub async fn get(&self, org: &str) -> Result<Response> {
        self.inner
            .get("/orgs/{org}", Params::new(), params! { "org" => org })
            .await
    }

    /// Update an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#update-an-organization
    pub async fn update(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .patch("/orgs/{org}", params, params! { "org" => org })
            .await
    }

    // Members
    // https://docs.github.com/rest/orgs/members

    /// List organization members
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#list-organization-members
    pub async fn list_members(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/members", params, params! { "org" => org })
            .await
    }

    /// Check organization membership for a user
    ///
    /// `204` for a member, `404` for a non-member and `302` when the requester is not an
    /// organization member themselves.
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#check-organization-membership-for-a-user
    pub async fn check_membership_for_user(&self, org: &str, username: &str) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/members/{username}",
                Params::new(),
                params! { "org" => org, "username" => username },
            )
            .await
    }

    /// Remove an organization member
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#remove-an-organization-member
    pub async fn remove_member(&self, org: &str, username: &str) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/members/{username}",
                Params::new(),
                params! { "org" => org, "username" => username },
            )
            .await
    }

    /// Get organization membership for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#get-organization-membership-for-a-user
    pub async fn get_membership_for_user(&self, org: &str, username: &str) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/memberships/{username}",
                Params::new(),
                params! { "org" => org, "username" => username },
            )
            .await
    }

    /// Set organization membership for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#set-organization-membership-for-a-user
    pub async fn set_membership_for_user(
        &self,
        org: &str,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/orgs/{org}/memberships/{username}",
                params,
                params! { "org" => org, "username" => username },
            )
            .await
    }

    /// Remove organization membership for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#remove-organization-membership-for-a-user
    pub async fn remove_membership_for_user(&self, org: &str, username: &str) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/memberships/{username}",
                Params::new(),
                params! { "org" => org, "username" => username },
            )
            .await
    }

    /// List public organization members
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#list-public-organization-members
    pub async fn list_public_members(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/public_members", params, params! { "org" => org })
            .await
    }

    // Outside collaborators
    // https://docs.github.com/rest/orgs/outside-collaborators

    /// List outside collaborators for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/outside-collaborators#list-outside-collaborators-for-an-organization
    pub async fn list_outside_collaborators(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/outside_collaborators", params, params! { "org" => org })
            .await
    }

    // Webhooks
    // https://docs.github.com/rest/orgs/webhooks

    /// List organization webhooks
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/webhooks#list-organization-webhooks
    pub async fn list_webhooks(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/hooks", params, params! { "org" => org })
            .await
    }

    /// Create an organization webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/webhooks#create-an-organization-webhook
    pub async fn create_webhook(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .post("/orgs/{org}/hooks", params, params! { "org" => org })
            .await
    }

    /// Get an organization webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/webhooks#get-an-organization-webhook
    pub async fn get_webhook(&self, org: &str, hook_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/hooks/{hook_id}",
                Params::new(),
                params! { "org" => org, "hook_id" => hook_id },
            )
            .await
    }

    /// Update an organization webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/webhooks#update-an-organization-webhook
    pub async fn update_webhook(
        &self,
        org: &str,
        hook_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/orgs/{org}/hooks/{hook_id}",
                params,
                params! { "org" => org, "hook_id" => hook_id },
            )
            .await
    }

    /// Delete an organization webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/webhooks#delete-an-organization-webhook
    pub async fn delete_webhook(&self, org: &str, hook_id: u64) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/hooks/{hook_id}",
                Params::new(),
                params! { "org" => org, "hook_id" => hook_id },
            )
            .await
    }

    /// Ping an organization webhook
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/webhooks#ping-an-organization-webhook
    pub async fn ping_webhook(&self, org: &str, hook_id: u64) -> Result<Response> {
        self.inner
            .post(
                "/orgs/{org}/hooks/{hook_id}/pings",
                Params::new(),
                params! { "org" => org, "hook_id" => hook_id },
            )
            .await
    }

    // Blocking
    // https://docs.github.com/rest/orgs/blocking

    /// List users blocked by an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/blocking#list-users-blocked-by-an-organization
    pub async fn list_blocked_users(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/blocks", params, params! { "org" => org })
            .await
    }

    /// Check if a user is blocked by an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/blocking#check-if-a-user-is-blocked-by-an-organization
    pub async fn check_blocked_user(&self, org: &str, username: &str) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/blocks/{username}",
                Params::new(),
                params! { "org" => org, "username" => username },
            )
            .await
    }

    /// Block a user from an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/blocking#block-a-user-from-an-organization
    pub async fn block_user(&self, org: &str, username: &str) -> Result<Response> {
        self.inner
            .put(
                "/orgs/{org}/blocks/{username}",
                Params::new(),
                params! { "org" => org, "username" => username },
            )
            .await
    }

    /// Unblock a user from an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/blocking#unblock-a-user-from-an-organization
    pub async fn unblock_user(&self, org: &str, username: &str) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/blocks/{username}",
                Params::new(),
                params! { "org" => org, "username" => username },
            )
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `UsersClient` handles communication with the users related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/users
#[derive(Clone, Debug)]
pub struct UsersClient {
    inner: Client,
}

impl UsersClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#get-the-authenticated-user
    pub async fn get_authenticated(&self) -> Result<Response> {
        self.inner.get("/user", Params::new(), Params::new()).await
    }

    /// Update the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#update-the-authenticated-user
    pub async fn update_authenticated(&self, params: Params) -> Result<Response> {
        self.inner.patch("/user", params, Params::new()).await
    }

    /// List users
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#list-users
    pub async fn list(&self, params: Params) -> Result<Response> {
        self.inner.get("/users", params, Params::new()).await
    }

    /// Get a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#get-a-user
    pub async fn get_by_username(&self, username: &str) -> Result<Response> {
        self.inner
            .get("/users/{username}", Params::new(), params! { "username" => username })
            .await
    }

    /// Get contextual information for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#get-contextual-information-for-a-user
    pub async fn get_context_for_user(&self, username: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/users/{username}/hovercard", params, params! { "username" => username })
            .await
    }

    // Emails
    // https://docs.github.com/rest/users/emails

    /// List email addresses for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/emails#list-email-addresses-for-the-authenticated-user
    pub async fn list_emails_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.get("/user/emails", params, Params::new()).await
    }

    /// Add an email address for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/emails#add-an-email-address-for-the-authenticated-user
    pub async fn add_email_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.post("/user/emails", params, Params::new()).await
    }

    /// Delete an email address for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/emails#delete-an-email-address-for-the-authenticated-user
    pub async fn delete_email_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner
            .delete("/user/emails", params, Params::new())
            .await
    }

    // Followers
    // https://docs.github.com/rest/users/followers

    /// List followers of the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#list-followers-of-the-authenticated-user
    pub async fn list_followers_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/user/followers", params, Params::new())
            .await
    }

    /// List the people the authenticated user follows
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#list-the-people-the-authenticated-user-follows
    pub async fn list_followed_by_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/user/following", params, Params::new())
            .await
    }

    /// Check if a person is followed by the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#check-if-a-person-is-followed-by-the-authenticated-user
    pub async fn check_person_is_followed_by_authenticated(
        &self,
        username: &str,
    ) -> Result<Response> {
        self.inner
            .get("/user/following/{username}", Params::new(), params! { "username" => username })
            .await
    }

    /// Follow a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#follow-a-user
    pub async fn follow(&self, username: &str) -> Result<Response> {
        self.inner
            .put("/user/following/{username}", Params::new(), params! { "username" => username })
            .await
    }

    /// Unfollow a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#unfollow-a-user
    pub async fn unfollow(&self, username: &str) -> Result<Response> {
        self.inner
            .delete("/user/following/{username}", Params::new(), params! { "username" => username })
            .await
    }

    /// List followers of a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#list-followers-of-a-user
    pub async fn list_followers_for_user(
        &self,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get("/users/{username}/followers", params, params! { "username" => username })
            .await
    }

    /// List the people a user follows
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#list-the-people-a-user-follows
    pub async fn list_following_for_user(
        &self,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get("/users/{username}/following", params, params! { "username" => username })
            .await
    }

    /// Check if a user follows another user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#check-if-a-user-follows-another-user
    pub async fn check_following_for_user(
        &self,
        username: &str,
        target_user: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/users/{username}/following/{target_user}",
                Params::new(),
                params! { "username" => username, "target_user" => target_user },
            )
            .await
    }

    // Keys
    // https://docs.github.com/rest/users/keys

    /// List public SSH keys for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/keys#list-public-ssh-keys-for-the-authenticated-user
    pub async fn list_public_ssh_keys_for_authenticated_user(
        &self,
        params: Params,
    ) -> Result<Response> {
        self.inner.get("/user/keys", params, Params::new()).await
    }

    /// Create a public SSH key for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/keys#create-a-public-ssh-key-for-the-authenticated-user
    pub async fn create_public_ssh_key_for_authenticated_user(
        &self,
        params: Params,
    ) -> Result<Response> {
        self.inner.post("/user/keys", params, Params::new()).await
    }

    /// Get a public SSH key for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/keys#get-a-public-ssh-key-for-the-authenticated-user
    pub async fn get_public_ssh_key_for_authenticated_user(&self, key_id: u64) -> Result<Response> {
        self.inner
            .get("/user/keys/{key_id}", Params::new(), params! { "key_id" => key_id })
            .await
    }

    /// Delete a public SSH key for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/keys#delete-a-public-ssh-key-for-the-authenticated-user
    pub async fn delete_public_ssh_key_for_authenticated_user(
        &self,
        key_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete("/user/keys/{key_id}", Params::new(), params! { "key_id" => key_id })
            .await
    }

    /// List public keys for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/keys#list-public-keys-for-a-user
    pub async fn list_public_keys_for_user(
        &self,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get("/users/{username}/keys", params, params! { "username" => username })
            .await
    }

    // Gpg keys
    // https://docs.github.com/rest/users/gpg-keys

    /// List GPG keys for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/gpg-keys#list-gpg-keys-for-a-user
    pub async fn list_gpg_keys_for_user(&self, username: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/users/{username}/gpg_keys", params, params! { "username" => username })
            .await
    }

    // Blocking
    // https://docs.github.com/rest/users/blocking

    /// List users blocked by the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/blocking#list-users-blocked-by-the-authenticated-user
    pub async fn list_blocked_by_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.get("/user/blocks", params, Params::new()).await
    }

    /// Check if a user is blocked by the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/blocking#check-if-a-user-is-blocked-by-the-authenticated-user
    pub async fn check_blocked(&self, username: &str) -> Result<Response> {
        self.inner
            .get("/user/blocks/{username}", Params::new(), params! { "username" => username })
            .await
    }

    /// Block a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/blocking#block-a-user
    pub async fn block(&self, username: &str) -> Result<Response> {
        self.inner
            .put("/user/blocks/{username}", Params::new(), params! { "username" => username })
            .await
    }

    /// Unblock a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/blocking#unblock-a-user
    pub async fn unblock(&self, username: &str) -> Result<Response> {
        self.inner
            .delete("/user/blocks/{username}", Params::new(), params! { "username" => username })
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `ActivityClient` handles communication with the activity related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/activity
#[derive(Clone, Debug)]
pub struct ActivityClient {
    inner: Client,
}

impl ActivityClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List public events
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/events#list-public-events
    pub async fn list_public_events(&self, params: Params) -> Result<Response> {
        self.inner.get("/events", params, Params::new()).await
    }

    /// List repository events
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/events#list-repository-events
    pub async fn list_repo_events(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/events",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List public events for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/events#list-public-events-for-a-user
    pub async fn list_public_events_for_user(
        &self,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get("/users/{username}/events/public", params, params! { "username" => username })
            .await
    }

    /// List events received by the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/events#list-events-received-by-the-authenticated-user
    pub async fn list_received_events_for_user(
        &self,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get("/users/{username}/received_events", params, params! { "username" => username })
            .await
    }

    // Notifications
    // https://docs.github.com/rest/activity/notifications

    /// List notifications for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/notifications#list-notifications-for-the-authenticated-user
    pub async fn list_notifications_for_authenticated_user(
        &self,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get("/notifications", params, Params::new())
            .await
    }

    /// Mark notifications as read
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/notifications#mark-notifications-as-read
    pub async fn mark_notifications_as_read(&self, params: Params) -> Result<Response> {
        self.inner
            .put("/notifications", params, Params::new())
            .await
    }

    /// Get a thread
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/notifications#get-a-thread
    pub async fn get_thread(&self, thread_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/notifications/threads/{thread_id}",
                Params::new(),
                params! { "thread_id" => thread_id },
            )
            .await
    }

    /// Mark a thread as read
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/notifications#mark-a-thread-as-read
    pub async fn mark_thread_as_read(&self, thread_id: u64) -> Result<Response> {
        self.inner
            .patch(
                "/notifications/threads/{thread_id}",
                Params::new(),
                params! { "thread_id" => thread_id },
            )
            .await
    }

    /// List repository notifications for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/notifications#list-repository-notifications-for-the-authenticated-user
    pub async fn list_repo_notifications_for_authenticated_user(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/notifications",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    // Starring
    // https://docs.github.com/rest/activity/starring

    /// List stargazers
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/starring#list-stargazers
    pub async fn list_stargazers_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/stargazers",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List repositories starred by the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/starring#list-repositories-starred-by-the-authenticated-user
    pub async fn list_repos_starred_by_authenticated_user(
        &self,
        params: Params,
    ) -> Result<Response> {
        self.inner.get("/user/starred", params, Params::new()).await
    }

    /// Check if a repository is starred by the authenticated user
    ///
    /// Responds `204` if the repository is starred and `404` if it is not.
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/starring#check-if-a-repository-is-starred-by-the-authenticated-user
    pub async fn check_repo_is_starred_by_authenticated_user(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/user/starred/{owner}/{repo}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Star a repository for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/starring#star-a-repository-for-the-authenticated-user
    pub async fn star_repo_for_authenticated_user(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response> {
        self.inner
            .put(
                "/user/starred/{owner}/{repo}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Unstar a repository for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/starring#unstar-a-repository-for-the-authenticated-user
    pub async fn unstar_repo_for_authenticated_user(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/user/starred/{owner}/{repo}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    // Watching
    // https://docs.github.com/rest/activity/watching

    /// List watchers
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/watching#list-watchers
    pub async fn list_watchers_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/subscribers",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository subscription
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/watching#get-a-repository-subscription
    pub async fn get_repo_subscription(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/subscription",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Set a repository subscription
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/watching#set-a-repository-subscription
    pub async fn set_repo_subscription(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/subscription",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Delete a repository subscription
    ///
    /// GitHub API docs: https://docs.github.com/rest/activity/watching#delete-a-repository-subscription
    pub async fn delete_repo_subscription(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/subscription",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }
}

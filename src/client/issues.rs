use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `IssuesClient` handles communication with the issues related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/issues
#[derive(Clone, Debug)]
pub struct IssuesClient {
    inner: Client,
}

impl IssuesClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List issues assigned to the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-issues-assigned-to-the-authenticated-user
    pub async fn list(&self, params: Params) -> Result<Response> {
        self.inner.get("/issues", params, Params::new()).await
    }

    /// List user account issues assigned to the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-user-account-issues-assigned-to-the-authenticated-user
    pub async fn list_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner.get("/user/issues", params, Params::new()).await
    }

    /// List organization issues assigned to the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-organization-issues-assigned-to-the-authenticated-user
    pub async fn list_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/issues", params, params! { "org" => org })
            .await
    }

    /// List repository issues
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-repository-issues
    pub async fn list_for_repo(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create an issue
    ///
    /// `params` must carry `title`. Labels, assignees and the milestone are only honoured for
    /// users with push access, GitHub silently drops them otherwise.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#create-an-issue
    pub async fn create(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#get-an-issue
    pub async fn get(&self, owner: &str, repo: &str, issue_number: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/{issue_number}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Update an issue
    ///
    /// An explicit JSON `null` for `milestone` removes the current one.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#update-an-issue
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/issues/{issue_number}",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Lock an issue
    ///
    /// `lock_reason` is optional and one of `off-topic`, `too heated`, `resolved` or `spam`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#lock-an-issue
    pub async fn lock(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/issues/{issue_number}/lock",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Unlock an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#unlock-an-issue
    pub async fn unlock(&self, owner: &str, repo: &str, issue_number: u64) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/lock",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    // Assignees
    // https://docs.github.com/rest/issues/assignees

    /// List assignees
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#list-assignees
    pub async fn list_assignees(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/assignees",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Check if a user can be assigned
    ///
    /// Responds `204` when the user can be assigned and `404` when they cannot.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#check-if-a-user-can-be-assigned
    pub async fn check_user_can_be_assigned(
        &self,
        owner: &str,
        repo: &str,
        assignee: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/assignees/{assignee}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "assignee" => assignee },
            )
            .await
    }

    /// Add assignees to an issue
    ///
    /// Add up to 10 assignees to an issue. Users already assigned to an issue are not replaced.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#add-assignees-to-an-issue
    pub async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Remove assignees from an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#remove-assignees-from-an-issue
    pub async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    // Comments
    // https://docs.github.com/rest/issues/comments

    /// List issue comments
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#list-issue-comments
    pub async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/{issue_number}/comments",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// List issue comments for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#list-issue-comments-for-a-repository
    pub async fn list_comments_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/comments",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#get-an-issue-comment
    pub async fn get_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Create an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#create-an-issue-comment
    pub async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/{issue_number}/comments",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Update an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#update-an-issue-comment
    pub async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Delete an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#delete-an-issue-comment
    pub async fn delete_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    // Events
    // https://docs.github.com/rest/issues/events

    /// List issue events
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/events#list-issue-events
    pub async fn list_events(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/{issue_number}/events",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// List issue events for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/events#list-issue-events-for-a-repository
    pub async fn list_events_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/events",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get an issue event
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/events#get-an-issue-event
    pub async fn get_event(&self, owner: &str, repo: &str, event_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/events/{event_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "event_id" => event_id },
            )
            .await
    }

    // Timeline
    // https://docs.github.com/rest/issues/timeline

    /// List timeline events for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/timeline#list-timeline-events-for-an-issue
    pub async fn list_events_for_timeline(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/{issue_number}/timeline",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    // Labels
    // https://docs.github.com/rest/issues/labels

    /// List labels for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#list-labels-for-a-repository
    pub async fn list_labels_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/labels",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#get-a-label
    pub async fn get_label(&self, owner: &str, repo: &str, name: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/labels/{name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "name" => name },
            )
            .await
    }

    /// Create a label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#create-a-label
    pub async fn create_label(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/labels",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Update a label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#update-a-label
    pub async fn update_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/labels/{name}",
                params,
                params! { "owner" => owner, "repo" => repo, "name" => name },
            )
            .await
    }

    /// Delete a label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#delete-a-label
    pub async fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/labels/{name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "name" => name },
            )
            .await
    }

    /// List labels for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#list-labels-for-an-issue
    pub async fn list_labels_on_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Add labels to an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#add-labels-to-an-issue
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Set labels for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#set-labels-for-an-issue
    pub async fn set_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Remove all labels from an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#remove-all-labels-from-an-issue
    pub async fn remove_all_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Remove a label from an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#remove-a-label-from-an-issue
    pub async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        name: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels/{name}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "issue_number" => issue_number,
                    "name" => name,
                },
            )
            .await
    }

    /// List labels for issues in a milestone
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#list-labels-for-issues-in-a-milestone
    pub async fn list_labels_for_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/milestones/{milestone_number}/labels",
                params,
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "milestone_number" => milestone_number,
                },
            )
            .await
    }

    // Milestones
    // https://docs.github.com/rest/issues/milestones

    /// List milestones
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#list-milestones
    pub async fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/milestones",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a milestone
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#create-a-milestone
    pub async fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/milestones",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a milestone
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#get-a-milestone
    pub async fn get_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/milestones/{milestone_number}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "milestone_number" => milestone_number,
                },
            )
            .await
    }

    /// Update a milestone
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#update-a-milestone
    pub async fn update_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/milestones/{milestone_number}",
                params,
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "milestone_number" => milestone_number,
                },
            )
            .await
    }

    /// Delete a milestone
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#delete-a-milestone
    pub async fn delete_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/milestones/{milestone_number}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "milestone_number" => milestone_number,
                },
            )
            .await
    }
}

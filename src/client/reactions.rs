use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `ReactionsClient` handles communication with the reactions related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/reactions
#[derive(Clone, Debug)]
pub struct ReactionsClient {
    inner: Client,
}

impl ReactionsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List reactions for a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-a-commit-comment
    pub async fn list_for_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/comments/{comment_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Create reaction for a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-a-commit-comment
    pub async fn create_for_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/comments/{comment_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Delete a commit comment reaction
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#delete-a-commit-comment-reaction
    pub async fn delete_for_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/comments/{comment_id}/reactions/{reaction_id}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "comment_id" => comment_id,
                    "reaction_id" => reaction_id,
                },
            )
            .await
    }

    /// List reactions for an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-an-issue-comment
    pub async fn list_for_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Create reaction for an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-an-issue-comment
    pub async fn create_for_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Delete an issue comment reaction
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#delete-an-issue-comment-reaction
    pub async fn delete_for_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions/{reaction_id}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "comment_id" => comment_id,
                    "reaction_id" => reaction_id,
                },
            )
            .await
    }

    /// List reactions for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-an-issue
    pub async fn list_for_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Create reaction for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-an-issue
    pub async fn create_for_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "issue_number" => issue_number },
            )
            .await
    }

    /// Delete an issue reaction
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#delete-an-issue-reaction
    pub async fn delete_for_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        reaction_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/reactions/{reaction_id}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "issue_number" => issue_number,
                    "reaction_id" => reaction_id,
                },
            )
            .await
    }

    /// List reactions for a pull request review comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-a-pull-request-review-comment
    pub async fn list_for_pull_request_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Create reaction for a pull request review comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-a-pull-request-review-comment
    pub async fn create_for_pull_request_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Delete a pull request comment reaction
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#delete-a-pull-request-comment-reaction
    pub async fn delete_for_pull_request_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/pulls/comments/{comment_id}/reactions/{reaction_id}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "comment_id" => comment_id,
                    "reaction_id" => reaction_id,
                },
            )
            .await
    }

    /// List reactions for a release
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-a-release
    pub async fn list_for_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/releases/{release_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "release_id" => release_id },
            )
            .await
    }

    /// Create reaction for a release
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-a-release
    pub async fn create_for_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/releases/{release_id}/reactions",
                params,
                params! { "owner" => owner, "repo" => repo, "release_id" => release_id },
            )
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `PullsClient` handles communication with the pulls related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/pulls
#[derive(Clone, Debug)]
pub struct PullsClient {
    inner: Client,
}

impl PullsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List pull requests
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#list-pull-requests
    pub async fn list(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#create-a-pull-request
    pub async fn create(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#get-a-pull-request
    pub async fn get(&self, owner: &str, repo: &str, pull_number: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Update a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#update-a-pull-request
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/pulls/{pull_number}",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// List commits on a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#list-commits-on-a-pull-request
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/commits",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// List pull requests files
    ///
    /// Responses include a maximum of 3000 files.
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#list-pull-requests-files
    pub async fn list_files(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/files",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Check if a pull request has been merged
    ///
    /// Responds `204` if the pull request has been merged and `404` if it has not.
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#check-if-a-pull-request-has-been-merged
    pub async fn check_if_merged(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Merge a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#merge-a-pull-request
    pub async fn merge(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Update a pull request branch
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#update-a-pull-request-branch
    pub async fn update_branch(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/pulls/{pull_number}/update-branch",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    // Comments
    // https://docs.github.com/rest/pulls/comments

    /// List review comments in a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#list-review-comments-in-a-repository
    pub async fn list_review_comments_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/comments",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a review comment for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#get-a-review-comment-for-a-pull-request
    pub async fn get_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Update a review comment for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#update-a-review-comment-for-a-pull-request
    pub async fn update_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// Delete a review comment for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#delete-a-review-comment-for-a-pull-request
    pub async fn delete_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "comment_id" => comment_id },
            )
            .await
    }

    /// List review comments on a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#list-review-comments-on-a-pull-request
    pub async fn list_review_comments(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Create a review comment for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#create-a-review-comment-for-a-pull-request
    pub async fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Create a reply for a review comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#create-a-reply-for-a-review-comment
    pub async fn create_reply_for_review_comment(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/comments/{comment_id}/replies",
                params,
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "pull_number" => pull_number,
                    "comment_id" => comment_id,
                },
            )
            .await
    }

    // Review requests
    // https://docs.github.com/rest/pulls/review-requests

    /// Get all requested reviewers for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/review-requests#get-all-requested-reviewers-for-a-pull-request
    pub async fn list_requested_reviewers(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Request reviewers for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/review-requests#request-reviewers-for-a-pull-request
    pub async fn request_reviewers(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Remove requested reviewers from a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/review-requests#remove-requested-reviewers-from-a-pull-request
    pub async fn remove_requested_reviewers(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    // Reviews
    // https://docs.github.com/rest/pulls/reviews

    /// List reviews for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#list-reviews-for-a-pull-request
    pub async fn list_reviews(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Create a review for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#create-a-review-for-a-pull-request
    pub async fn create_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
                params,
                params! { "owner" => owner, "repo" => repo, "pull_number" => pull_number },
            )
            .await
    }

    /// Get a review for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#get-a-review-for-a-pull-request
    pub async fn get_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "pull_number" => pull_number,
                    "review_id" => review_id,
                },
            )
            .await
    }

    /// Update a review for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#update-a-review-for-a-pull-request
    pub async fn update_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
                params,
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "pull_number" => pull_number,
                    "review_id" => review_id,
                },
            )
            .await
    }

    /// Delete a pending review for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#delete-a-pending-review-for-a-pull-request
    pub async fn delete_pending_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "pull_number" => pull_number,
                    "review_id" => review_id,
                },
            )
            .await
    }

    /// List comments for a pull request review
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#list-comments-for-a-pull-request-review
    pub async fn list_comments_for_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/comments",
                params,
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "pull_number" => pull_number,
                    "review_id" => review_id,
                },
            )
            .await
    }

    /// Submit a review for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#submit-a-review-for-a-pull-request
    pub async fn submit_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/events",
                params,
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "pull_number" => pull_number,
                    "review_id" => review_id,
                },
            )
            .await
    }

    /// Dismiss a review for a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#dismiss-a-review-for-a-pull-request
    pub async fn dismiss_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/dismissals",
                params,
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "pull_number" => pull_number,
                    "review_id" => review_id,
                },
            )
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `GistsClient` handles communication with the gists related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/gists
#[derive(Clone, Debug)]
pub struct GistsClient {
    inner: Client,
}

impl GistsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List gists for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#list-gists-for-the-authenticated-user
    pub async fn list(&self, params: Params) -> Result<Response> {
        self.inner.get("/gists", params, Params::new()).await
    }

    /// Create a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#create-a-gist
    pub async fn create(&self, params: Params) -> Result<Response> {
        self.inner.post("/gists", params, Params::new()).await
    }

    /// List public gists
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#list-public-gists
    pub async fn list_public(&self, params: Params) -> Result<Response> {
        self.inner.get("/gists/public", params, Params::new()).await
    }

    /// List starred gists
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#list-starred-gists
    pub async fn list_starred(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/gists/starred", params, Params::new())
            .await
    }

    /// Get a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#get-a-gist
    pub async fn get(&self, gist_id: &str) -> Result<Response> {
        self.inner
            .get("/gists/{gist_id}", Params::new(), params! { "gist_id" => gist_id })
            .await
    }

    /// Update a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#update-a-gist
    pub async fn update(&self, gist_id: &str, params: Params) -> Result<Response> {
        self.inner
            .patch("/gists/{gist_id}", params, params! { "gist_id" => gist_id })
            .await
    }

    /// Delete a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#delete-a-gist
    pub async fn delete(&self, gist_id: &str) -> Result<Response> {
        self.inner
            .delete("/gists/{gist_id}", Params::new(), params! { "gist_id" => gist_id })
            .await
    }

    /// List gist commits
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#list-gist-commits
    pub async fn list_commits(&self, gist_id: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/gists/{gist_id}/commits", params, params! { "gist_id" => gist_id })
            .await
    }

    /// List gist forks
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#list-gist-forks
    pub async fn list_forks(&self, gist_id: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/gists/{gist_id}/forks", params, params! { "gist_id" => gist_id })
            .await
    }

    /// Fork a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#fork-a-gist
    pub async fn fork(&self, gist_id: &str) -> Result<Response> {
        self.inner
            .post("/gists/{gist_id}/forks", Params::new(), params! { "gist_id" => gist_id })
            .await
    }

    /// Check if a gist is starred
    ///
    /// Responds `204` if the gist is starred and `404` if it is not.
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#check-if-a-gist-is-starred
    pub async fn check_is_starred(&self, gist_id: &str) -> Result<Response> {
        self.inner
            .get("/gists/{gist_id}/star", Params::new(), params! { "gist_id" => gist_id })
            .await
    }

    /// Star a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#star-a-gist
    pub async fn star(&self, gist_id: &str) -> Result<Response> {
        self.inner
            .put("/gists/{gist_id}/star", Params::new(), params! { "gist_id" => gist_id })
            .await
    }

    /// Unstar a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#unstar-a-gist
    pub async fn unstar(&self, gist_id: &str) -> Result<Response> {
        self.inner
            .delete("/gists/{gist_id}/star", Params::new(), params! { "gist_id" => gist_id })
            .await
    }

    /// Get a gist revision
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#get-a-gist-revision
    pub async fn get_revision(&self, gist_id: &str, sha: &str) -> Result<Response> {
        self.inner
            .get(
                "/gists/{gist_id}/{sha}",
                Params::new(),
                params! { "gist_id" => gist_id, "sha" => sha },
            )
            .await
    }

    /// List gists for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#list-gists-for-a-user
    pub async fn list_for_user(&self, username: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/users/{username}/gists", params, params! { "username" => username })
            .await
    }

    // Comments
    // https://docs.github.com/rest/gists/comments

    /// List gist comments
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/comments#list-gist-comments
    pub async fn list_comments(&self, gist_id: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/gists/{gist_id}/comments", params, params! { "gist_id" => gist_id })
            .await
    }

    /// Create a gist comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/comments#create-a-gist-comment
    pub async fn create_comment(&self, gist_id: &str, params: Params) -> Result<Response> {
        self.inner
            .post("/gists/{gist_id}/comments", params, params! { "gist_id" => gist_id })
            .await
    }

    /// Get a gist comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/comments#get-a-gist-comment
    pub async fn get_comment(&self, gist_id: &str, comment_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/gists/{gist_id}/comments/{comment_id}",
                Params::new(),
                params! { "gist_id" => gist_id, "comment_id" => comment_id },
            )
            .await
    }

    /// Update a gist comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/comments#update-a-gist-comment
    pub async fn update_comment(
        &self,
        gist_id: &str,
        comment_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/gists/{gist_id}/comments/{comment_id}",
                params,
                params! { "gist_id" => gist_id, "comment_id" => comment_id },
            )
            .await
    }

    /// Delete a gist comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/comments#delete-a-gist-comment
    pub async fn delete_comment(&self, gist_id: &str, comment_id: u64) -> Result<Response> {
        self.inner
            .delete(
                "/gists/{gist_id}/comments/{comment_id}",
                Params::new(),
                params! { "gist_id" => gist_id, "comment_id" => comment_id },
            )
            .await
    }
}

use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `ChecksClient` handles communication with the checks related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/checks
#[derive(Clone, Debug)]
pub struct ChecksClient {
    inner: Client,
}

impl ChecksClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Create a check run
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#create-a-check-run
    pub async fn create(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/check-runs",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a check run
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#get-a-check-run
    pub async fn get(&self, owner: &str, repo: &str, check_run_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/check-runs/{check_run_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "check_run_id" => check_run_id },
            )
            .await
    }

    /// Update a check run
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#update-a-check-run
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        check_run_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/check-runs/{check_run_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "check_run_id" => check_run_id },
            )
            .await
    }

    /// List check run annotations
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#list-check-run-annotations
    pub async fn list_annotations(
        &self,
        owner: &str,
        repo: &str,
        check_run_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/check-runs/{check_run_id}/annotations",
                params,
                params! { "owner" => owner, "repo" => repo, "check_run_id" => check_run_id },
            )
            .await
    }

    /// Rerequest a check run
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#rerequest-a-check-run
    pub async fn rerequest_run(
        &self,
        owner: &str,
        repo: &str,
        check_run_id: u64,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/check-runs/{check_run_id}/rerequest",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "check_run_id" => check_run_id },
            )
            .await
    }

    /// List check runs for a Git reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#list-check-runs-for-a-git-reference
    pub async fn list_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits/{ref}/check-runs",
                params,
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }

    /// List check runs in a check suite
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#list-check-runs-in-a-check-suite
    pub async fn list_for_suite(
        &self,
        owner: &str,
        repo: &str,
        check_suite_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/check-suites/{check_suite_id}/check-runs",
                params,
                params! { "owner" => owner, "repo" => repo, "check_suite_id" => check_suite_id },
            )
            .await
    }

    // Suites
    // https://docs.github.com/rest/checks/suites

    /// Create a check suite
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/suites#create-a-check-suite
    pub async fn create_suite(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/check-suites",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a check suite
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/suites#get-a-check-suite
    pub async fn get_suite(
        &self,
        owner: &str,
        repo: &str,
        check_suite_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/check-suites/{check_suite_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "check_suite_id" => check_suite_id },
            )
            .await
    }

    /// Rerequest a check suite
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/suites#rerequest-a-check-suite
    pub async fn rerequest_suite(
        &self,
        owner: &str,
        repo: &str,
        check_suite_id: u64,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/check-suites/{check_suite_id}/rerequest",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "check_suite_id" => check_suite_id },
            )
            .await
    }

    /// Update repository preferences for check suites
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/suites#update-repository-preferences-for-check-suites
    pub async fn set_suites_preferences(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/check-suites/preferences",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List check suites for a Git reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/suites#list-check-suites-for-a-git-reference
    pub async fn list_suites_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/commits/{ref}/check-suites",
                params,
                params! { "owner" => owner, "repo" => repo, "ref" => git_ref },
            )
            .await
    }
}

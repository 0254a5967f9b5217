use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `ActionsClient` handles communication with the actions related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/actions
#[derive(Clone, Debug)]
pub struct ActionsClient {
    inner: Client,
}

impl ActionsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List artifacts for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/artifacts#list-artifacts-for-a-repository
    pub async fn list_artifacts_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/artifacts",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get an artifact
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/artifacts#get-an-artifact
    pub async fn get_artifact(
        &self,
        owner: &str,
        repo: &str,
        artifact_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/artifacts/{artifact_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "artifact_id" => artifact_id },
            )
            .await
    }

    /// Delete an artifact
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/artifacts#delete-an-artifact
    pub async fn delete_artifact(
        &self,
        owner: &str,
        repo: &str,
        artifact_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/actions/artifacts/{artifact_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "artifact_id" => artifact_id },
            )
            .await
    }

    /// Download an artifact
    ///
    /// `archive_format` must be `zip`. GitHub answers with a redirect to a short lived URL, which
    /// the transport follows.
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/artifacts#download-an-artifact
    pub async fn download_artifact(
        &self,
        owner: &str,
        repo: &str,
        artifact_id: u64,
        archive_format: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/artifacts/{artifact_id}/{archive_format}",
                Params::new(),
                params! {
                    "owner" => owner,
                    "repo" => repo,
                    "artifact_id" => artifact_id,
                    "archive_format" => archive_format,
                },
            )
            .await
    }

    /// List workflow run artifacts
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/artifacts#list-workflow-run-artifacts
    pub async fn list_workflow_run_artifacts(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/artifacts",
                params,
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    // Cache
    // https://docs.github.com/rest/actions/cache

    /// Get GitHub Actions cache usage for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/cache#get-github-actions-cache-usage-for-a-repository
    pub async fn get_actions_cache_usage(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/cache/usage",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List GitHub Actions caches for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/cache#list-github-actions-caches-for-a-repository
    pub async fn get_actions_cache_list(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/caches",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Delete GitHub Actions caches for a repository (using a cache key)
    ///
    /// `key` and the optional `ref` are sent in the query string.
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/cache#delete-github-actions-caches-for-a-repository-using-a-cache-key
    pub async fn delete_actions_cache_by_key(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .delete_with_query(
                "/repos/{owner}/{repo}/actions/caches",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Delete a GitHub Actions cache for a repository (using a cache ID)
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/cache#delete-a-github-actions-cache-for-a-repository-using-a-cache-id
    pub async fn delete_actions_cache_by_id(
        &self,
        owner: &str,
        repo: &str,
        cache_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/actions/caches/{cache_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "cache_id" => cache_id },
            )
            .await
    }

    // Workflows
    // https://docs.github.com/rest/actions/workflows

    /// List repository workflows
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflows#list-repository-workflows
    pub async fn list_repo_workflows(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/workflows",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a workflow
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflows#get-a-workflow
    pub async fn get_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/workflows/{workflow_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "workflow_id" => workflow_id },
            )
            .await
    }

    /// Disable a workflow
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflows#disable-a-workflow
    pub async fn disable_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: &str,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/disable",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "workflow_id" => workflow_id },
            )
            .await
    }

    /// Enable a workflow
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflows#enable-a-workflow
    pub async fn enable_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: &str,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/enable",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "workflow_id" => workflow_id },
            )
            .await
    }

    /// Create a workflow dispatch event
    ///
    /// `params` needs `ref`; workflow `inputs` go in as a JSON object.
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflows#create-a-workflow-dispatch-event
    pub async fn create_workflow_dispatch(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/dispatches",
                params,
                params! { "owner" => owner, "repo" => repo, "workflow_id" => workflow_id },
            )
            .await
    }

    // Workflow runs
    // https://docs.github.com/rest/actions/workflow-runs

    /// List workflow runs for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#list-workflow-runs-for-a-repository
    pub async fn list_workflow_runs_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/runs",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// List workflow runs for a workflow
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#list-workflow-runs-for-a-workflow
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/runs",
                params,
                params! { "owner" => owner, "repo" => repo, "workflow_id" => workflow_id },
            )
            .await
    }

    /// Get a workflow run
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#get-a-workflow-run
    pub async fn get_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/runs/{run_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    /// Delete a workflow run
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#delete-a-workflow-run
    pub async fn delete_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/actions/runs/{run_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    /// Cancel a workflow run
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#cancel-a-workflow-run
    pub async fn cancel_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/cancel",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    /// Re-run a workflow
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#re-run-a-workflow
    pub async fn rerun_workflow(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/rerun",
                params,
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    /// Re-run failed jobs from a workflow run
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#re-run-failed-jobs-from-a-workflow-run
    pub async fn rerun_workflow_failed_jobs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/rerun-failed-jobs",
                params,
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    /// Download workflow run logs
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#download-workflow-run-logs
    pub async fn download_workflow_run_logs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/logs",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    /// Delete workflow run logs
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#delete-workflow-run-logs
    pub async fn delete_workflow_run_logs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/logs",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    // Workflow jobs
    // https://docs.github.com/rest/actions/workflow-jobs

    /// List jobs for a workflow run
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-jobs#list-jobs-for-a-workflow-run
    pub async fn list_jobs_for_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/jobs",
                params,
                params! { "owner" => owner, "repo" => repo, "run_id" => run_id },
            )
            .await
    }

    /// Get a job for a workflow run
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-jobs#get-a-job-for-a-workflow-run
    pub async fn get_job_for_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        job_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/jobs/{job_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "job_id" => job_id },
            )
            .await
    }

    /// Download job logs for a workflow run
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-jobs#download-job-logs-for-a-workflow-run
    pub async fn download_job_logs_for_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        job_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/jobs/{job_id}/logs",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "job_id" => job_id },
            )
            .await
    }

    // Secrets
    // https://docs.github.com/rest/actions/secrets

    /// List repository secrets
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#list-repository-secrets
    pub async fn list_repo_secrets(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/secrets",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository public key
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#get-a-repository-public-key
    pub async fn get_repo_public_key(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/secrets/public-key",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository secret
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#get-a-repository-secret
    pub async fn get_repo_secret(
        &self,
        owner: &str,
        repo: &str,
        secret_name: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/secrets/{secret_name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "secret_name" => secret_name },
            )
            .await
    }

    /// Create or update a repository secret
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#create-or-update-a-repository-secret
    pub async fn create_or_update_repo_secret(
        &self,
        owner: &str,
        repo: &str,
        secret_name: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/actions/secrets/{secret_name}",
                params,
                params! { "owner" => owner, "repo" => repo, "secret_name" => secret_name },
            )
            .await
    }

    /// Delete a repository secret
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#delete-a-repository-secret
    pub async fn delete_repo_secret(
        &self,
        owner: &str,
        repo: &str,
        secret_name: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/actions/secrets/{secret_name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "secret_name" => secret_name },
            )
            .await
    }

    // Variables
    // https://docs.github.com/rest/actions/variables

    /// List repository variables
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/variables#list-repository-variables
    pub async fn list_repo_variables(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/variables",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a repository variable
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/variables#create-a-repository-variable
    pub async fn create_repo_variable(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/actions/variables",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a repository variable
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/variables#get-a-repository-variable
    pub async fn get_repo_variable(&self, owner: &str, repo: &str, name: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/variables/{name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "name" => name },
            )
            .await
    }

    /// Update a repository variable
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/variables#update-a-repository-variable
    pub async fn update_repo_variable(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/actions/variables/{name}",
                params,
                params! { "owner" => owner, "repo" => repo, "name" => name },
            )
            .await
    }

    /// Delete a repository variable
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/variables#delete-a-repository-variable
    pub async fn delete_repo_variable(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/actions/variables/{name}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "name" => name },
            )
            .await
    }

    // Self hosted runners
    // https://docs.github.com/rest/actions/self-hosted-runners

    /// List self-hosted runners for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/self-hosted-runners#list-self-hosted-runners-for-a-repository
    pub async fn list_self_hosted_runners_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/runners",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a self-hosted runner for a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/self-hosted-runners#get-a-self-hosted-runner-for-a-repository
    pub async fn get_self_hosted_runner_for_repo(
        &self,
        owner: &str,
        repo: &str,
        runner_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/actions/runners/{runner_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "runner_id" => runner_id },
            )
            .await
    }

    /// Delete a self-hosted runner from a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/self-hosted-runners#delete-a-self-hosted-runner-from-a-repository
    pub async fn delete_self_hosted_runner_from_repo(
        &self,
        owner: &str,
        repo: &str,
        runner_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/actions/runners/{runner_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "runner_id" => runner_id },
            )
            .await
    }
}

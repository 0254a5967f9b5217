use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation for the branches endpoints
// https://docs.github.com/rest/branches/branches
impl RepositoryClient {
    /// List branches
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branches#list-branches
    pub async fn list_branches(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/branches",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a branch
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branches#get-a-branch
    pub async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/branches/{branch}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "branch" => branch },
            )
            .await
    }

    /// Rename a branch
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branches#rename-a-branch
    pub async fn rename_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/branches/{branch}/rename",
                params,
                params! { "owner" => owner, "repo" => repo, "branch" => branch },
            )
            .await
    }

    /// Sync a fork branch with the upstream repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branches#sync-a-fork-branch-with-the-upstream-repository
    pub async fn merge_upstream(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/merge-upstream",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Merge a branch
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branches#merge-a-branch
    pub async fn merge(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/merges",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    // Branch protection
    // https://docs.github.com/rest/branches/branch-protection

    /// Get branch protection
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branch-protection#get-branch-protection
    pub async fn get_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/branches/{branch}/protection",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "branch" => branch },
            )
            .await
    }

    /// Update branch protection
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branch-protection#update-branch-protection
    pub async fn update_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/branches/{branch}/protection",
                params,
                params! { "owner" => owner, "repo" => repo, "branch" => branch },
            )
            .await
    }

    /// Delete branch protection
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branch-protection#delete-branch-protection
    pub async fn delete_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/branches/{branch}/protection",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "branch" => branch },
            )
            .await
    }
}

use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation for the releases endpoints
// https://docs.github.com/rest/releases/releases
impl RepositoryClient {
    /// List releases
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#list-releases
    pub async fn list_releases(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/releases",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a release
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#create-a-release
    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/releases",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Generate release notes content for a release
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#generate-release-notes-content-for-a-release
    pub async fn generate_release_notes(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/releases/generate-notes",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get the latest release
    ///
    /// The latest published full release, drafts and prereleases are not considered.
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#get-the-latest-release
    pub async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/releases/latest",
                Params::new(),
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a release by tag name
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#get-a-release-by-tag-name
    pub async fn get_release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/releases/tags/{tag}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "tag" => tag },
            )
            .await
    }

    /// Get a release
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#get-a-release
    pub async fn get_release(&self, owner: &str, repo: &str, release_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/releases/{release_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "release_id" => release_id },
            )
            .await
    }

    /// Update a release
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#update-a-release
    pub async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/releases/{release_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "release_id" => release_id },
            )
            .await
    }

    /// Delete a release
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#delete-a-release
    pub async fn delete_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/releases/{release_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "release_id" => release_id },
            )
            .await
    }

    // Assets
    // https://docs.github.com/rest/releases/assets

    /// List release assets
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/assets#list-release-assets
    pub async fn list_release_assets(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/releases/{release_id}/assets",
                params,
                params! { "owner" => owner, "repo" => repo, "release_id" => release_id },
            )
            .await
    }

    /// Get a release asset
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/assets#get-a-release-asset
    pub async fn get_release_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/releases/assets/{asset_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "asset_id" => asset_id },
            )
            .await
    }

    /// Update a release asset
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/assets#update-a-release-asset
    pub async fn update_release_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/releases/assets/{asset_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "asset_id" => asset_id },
            )
            .await
    }

    /// Delete a release asset
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/assets#delete-a-release-asset
    pub async fn delete_release_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/releases/assets/{asset_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "asset_id" => asset_id },
            )
            .await
    }
}

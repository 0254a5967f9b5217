use super::RepositoryClient;
use crate::{
    client::{Params, Response, Result},
    params,
};

// Implementation from the collaborators endpoint
// https://docs.github.com/rest/collaborators
impl RepositoryClient {
    /// List repository collaborators
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#list-repository-collaborators
    pub async fn list_collaborators(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/collaborators",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Check if a user is a repository collaborator
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#check-if-a-user-is-a-repository-collaborator
    pub async fn check_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/collaborators/{username}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "username" => username },
            )
            .await
    }

    /// Add a repository collaborator
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#add-a-repository-collaborator
    pub async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .put(
                "/repos/{owner}/{repo}/collaborators/{username}",
                params,
                params! { "owner" => owner, "repo" => repo, "username" => username },
            )
            .await
    }

    /// Remove a repository collaborator
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#remove-a-repository-collaborator
    pub async fn remove_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/collaborators/{username}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "username" => username },
            )
            .await
    }

    /// Get repository permissions for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#get-repository-permissions-for-a-user
    pub async fn get_collaborator_permission_level(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/collaborators/{username}/permission",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "username" => username },
            )
            .await
    }

    // Invitations
    // https://docs.github.com/rest/collaborators/invitations

    /// List repository invitations
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/invitations#list-repository-invitations
    pub async fn list_invitations(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/invitations",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Update a repository invitation
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/invitations#update-a-repository-invitation
    pub async fn update_invitation(
        &self,
        owner: &str,
        repo: &str,
        invitation_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .patch(
                "/repos/{owner}/{repo}/invitations/{invitation_id}",
                params,
                params! { "owner" => owner, "repo" => repo, "invitation_id" => invitation_id },
            )
            .await
    }

    /// Delete a repository invitation
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/invitations#delete-a-repository-invitation
    pub async fn delete_invitation(
        &self,
        owner: &str,
        repo: &str,
        invitation_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/repos/{owner}/{repo}/invitations/{invitation_id}",
                Params::new(),
                params! { "owner" => owner, "repo" => repo, "invitation_id" => invitation_id },
            )
            .await
    }
}

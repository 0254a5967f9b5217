use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `MigrationsClient` handles communication with the migrations related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/migrations
#[derive(Clone, Debug)]
pub struct MigrationsClient {
    inner: Client,
}

impl MigrationsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List organization migrations
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/orgs#list-organization-migrations
    pub async fn list_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/migrations", params, params! { "org" => org })
            .await
    }

    /// Start an organization migration
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/orgs#start-an-organization-migration
    pub async fn start_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .post("/orgs/{org}/migrations", params, params! { "org" => org })
            .await
    }

    /// Get an organization migration status
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/orgs#get-an-organization-migration-status
    pub async fn get_status_for_org(
        &self,
        org: &str,
        migration_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/migrations/{migration_id}",
                params,
                params! { "org" => org, "migration_id" => migration_id },
            )
            .await
    }

    /// Download an organization migration archive
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/orgs#download-an-organization-migration-archive
    pub async fn download_archive_for_org(&self, org: &str, migration_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/migrations/{migration_id}/archive",
                Params::new(),
                params! { "org" => org, "migration_id" => migration_id },
            )
            .await
    }

    /// Delete an organization migration archive
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/orgs#delete-an-organization-migration-archive
    pub async fn delete_archive_for_org(&self, org: &str, migration_id: u64) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/migrations/{migration_id}/archive",
                Params::new(),
                params! { "org" => org, "migration_id" => migration_id },
            )
            .await
    }

    // Users
    // https://docs.github.com/rest/migrations/users

    /// List user migrations
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/users#list-user-migrations
    pub async fn list_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/user/migrations", params, Params::new())
            .await
    }

    /// Start a user migration
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/users#start-a-user-migration
    pub async fn start_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner
            .post("/user/migrations", params, Params::new())
            .await
    }

    /// Get a user migration status
    ///
    /// GitHub API docs: https://docs.github.com/rest/migrations/users#get-a-user-migration-status
    pub async fn get_status_for_authenticated_user(
        &self,
        migration_id: u64,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/user/migrations/{migration_id}",
                params,
                params! { "migration_id" => migration_id },
            )
            .await
    }
}

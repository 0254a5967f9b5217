use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `PackagesClient` handles communication with the packages related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/packages
#[derive(Clone, Debug)]
pub struct PackagesClient {
    inner: Client,
}

impl PackagesClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List packages for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#list-packages-for-an-organization
    pub async fn list_packages_for_organization(
        &self,
        org: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/packages", params, params! { "org" => org })
            .await
    }

    /// Get a package for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#get-a-package-for-an-organization
    pub async fn get_package_for_organization(
        &self,
        org: &str,
        package_type: &str,
        package_name: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/packages/{package_type}/{package_name}",
                Params::new(),
                params! {
                    "org" => org,
                    "package_type" => package_type,
                    "package_name" => package_name,
                },
            )
            .await
    }

    /// Delete a package for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#delete-a-package-for-an-organization
    pub async fn delete_package_for_org(
        &self,
        org: &str,
        package_type: &str,
        package_name: &str,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/packages/{package_type}/{package_name}",
                Params::new(),
                params! {
                    "org" => org,
                    "package_type" => package_type,
                    "package_name" => package_name,
                },
            )
            .await
    }

    /// List package versions for a package owned by an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#list-package-versions-for-a-package-owned-by-an-organization
    pub async fn get_all_package_versions_for_package_owned_by_org(
        &self,
        org: &str,
        package_type: &str,
        package_name: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/packages/{package_type}/{package_name}/versions",
                params,
                params! {
                    "org" => org,
                    "package_type" => package_type,
                    "package_name" => package_name,
                },
            )
            .await
    }

    /// Get a package version for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#get-a-package-version-for-an-organization
    pub async fn get_package_version_for_organization(
        &self,
        org: &str,
        package_type: &str,
        package_name: &str,
        package_version_id: u64,
    ) -> Result<Response> {
        self.inner
            .get(
                "/orgs/{org}/packages/{package_type}/{package_name}/versions/{package_version_id}",
                Params::new(),
                params! {
                    "org" => org,
                    "package_type" => package_type,
                    "package_name" => package_name,
                    "package_version_id" => package_version_id,
                },
            )
            .await
    }

    /// Delete package version for an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#delete-package-version-for-an-organization
    pub async fn delete_package_version_for_org(
        &self,
        org: &str,
        package_type: &str,
        package_name: &str,
        package_version_id: u64,
    ) -> Result<Response> {
        self.inner
            .delete(
                "/orgs/{org}/packages/{package_type}/{package_name}/versions/{package_version_id}",
                Params::new(),
                params! {
                    "org" => org,
                    "package_type" => package_type,
                    "package_name" => package_name,
                    "package_version_id" => package_version_id,
                },
            )
            .await
    }

    /// List packages for the authenticated user's namespace
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#list-packages-for-the-authenticated-users-namespace
    pub async fn list_packages_for_authenticated_user(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/user/packages", params, Params::new())
            .await
    }

    /// Get a package for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#get-a-package-for-the-authenticated-user
    pub async fn get_package_for_authenticated_user(
        &self,
        package_type: &str,
        package_name: &str,
    ) -> Result<Response> {
        self.inner
            .get(
                "/user/packages/{package_type}/{package_name}",
                Params::new(),
                params! { "package_type" => package_type, "package_name" => package_name },
            )
            .await
    }

    /// List packages for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/packages/packages#list-packages-for-a-user
    pub async fn list_packages_for_user(&self, username: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/users/{username}/packages", params, params! { "username" => username })
            .await
    }
}

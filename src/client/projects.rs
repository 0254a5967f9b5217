use crate::{
    client::{Client, Params, Response, Result},
    params,
};

/// `ProjectsClient` handles communication with the projects related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/projects
#[derive(Clone, Debug)]
pub struct ProjectsClient {
    inner: Client,
}

impl ProjectsClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// List organization projects
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/projects#list-organization-projects
    pub async fn list_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .get("/orgs/{org}/projects", params, params! { "org" => org })
            .await
    }

    /// Create an organization project
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/projects#create-an-organization-project
    pub async fn create_for_org(&self, org: &str, params: Params) -> Result<Response> {
        self.inner
            .post("/orgs/{org}/projects", params, params! { "org" => org })
            .await
    }

    /// List repository projects
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/projects#list-repository-projects
    pub async fn list_for_repo(&self, owner: &str, repo: &str, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/repos/{owner}/{repo}/projects",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Create a repository project
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/projects#create-a-repository-project
    pub async fn create_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: Params,
    ) -> Result<Response> {
        self.inner
            .post(
                "/repos/{owner}/{repo}/projects",
                params,
                params! { "owner" => owner, "repo" => repo },
            )
            .await
    }

    /// Get a project
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/projects#get-a-project
    pub async fn get(&self, project_id: u64) -> Result<Response> {
        self.inner
            .get("/projects/{project_id}", Params::new(), params! { "project_id" => project_id })
            .await
    }

    /// Update a project
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/projects#update-a-project
    pub async fn update(&self, project_id: u64, params: Params) -> Result<Response> {
        self.inner
            .patch("/projects/{project_id}", params, params! { "project_id" => project_id })
            .await
    }

    /// Delete a project
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/projects#delete-a-project
    pub async fn delete(&self, project_id: u64) -> Result<Response> {
        self.inner
            .delete("/projects/{project_id}", Params::new(), params! { "project_id" => project_id })
            .await
    }

    // Columns
    // https://docs.github.com/rest/projects/columns

    /// List project columns
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/columns#list-project-columns
    pub async fn list_columns(&self, project_id: u64, params: Params) -> Result<Response> {
        self.inner
            .get("/projects/{project_id}/columns", params, params! { "project_id" => project_id })
            .await
    }

    /// Create a project column
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/columns#create-a-project-column
    pub async fn create_column(&self, project_id: u64, params: Params) -> Result<Response> {
        self.inner
            .post("/projects/{project_id}/columns", params, params! { "project_id" => project_id })
            .await
    }

    /// Get a project column
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/columns#get-a-project-column
    pub async fn get_column(&self, column_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/projects/columns/{column_id}",
                Params::new(),
                params! { "column_id" => column_id },
            )
            .await
    }

    /// Update an existing project column
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/columns#update-an-existing-project-column
    pub async fn update_column(&self, column_id: u64, params: Params) -> Result<Response> {
        self.inner
            .patch("/projects/columns/{column_id}", params, params! { "column_id" => column_id })
            .await
    }

    /// Delete a project column
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/columns#delete-a-project-column
    pub async fn delete_column(&self, column_id: u64) -> Result<Response> {
        self.inner
            .delete(
                "/projects/columns/{column_id}",
                Params::new(),
                params! { "column_id" => column_id },
            )
            .await
    }

    // Cards
    // https://docs.github.com/rest/projects/cards

    /// List project cards
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/cards#list-project-cards
    pub async fn list_cards(&self, column_id: u64, params: Params) -> Result<Response> {
        self.inner
            .get(
                "/projects/columns/{column_id}/cards",
                params,
                params! { "column_id" => column_id },
            )
            .await
    }

    /// Create a project card
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/cards#create-a-project-card
    pub async fn create_card(&self, column_id: u64, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/projects/columns/{column_id}/cards",
                params,
                params! { "column_id" => column_id },
            )
            .await
    }

    /// Get a project card
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/cards#get-a-project-card
    pub async fn get_card(&self, card_id: u64) -> Result<Response> {
        self.inner
            .get(
                "/projects/columns/cards/{card_id}",
                Params::new(),
                params! { "card_id" => card_id },
            )
            .await
    }

    /// Move a project card
    ///
    /// GitHub API docs: https://docs.github.com/rest/projects/cards#move-a-project-card
    pub async fn move_card(&self, card_id: u64, params: Params) -> Result<Response> {
        self.inner
            .post(
                "/projects/columns/cards/{card_id}/moves",
                params,
                params! { "card_id" => card_id },
            )
            .await
    }
}

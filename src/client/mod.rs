use log::debug;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client as ReqwestClient, Method,
};
use std::{fmt, time::Duration};
use url::Url;

mod actions;
mod activity;
mod apps;
mod billing;
mod checks;
mod code_scanning;
mod codes_of_conduct;
mod dependabot;
mod emojis;
mod error;
mod gists;
mod git;
mod gitignore;
mod interactions;
mod issues;
mod licenses;
mod markdown;
mod meta;
mod migrations;
mod orgs;
mod packages;
mod params;
mod projects;
mod pulls;
mod rate_limit;
mod reactions;
mod repos;
mod response;
mod search;
mod secret_scanning;
mod teams;
mod users;

pub use actions::ActionsClient;
pub use activity::ActivityClient;
pub use apps::AppsClient;
pub use billing::BillingClient;
pub use checks::ChecksClient;
pub use code_scanning::CodeScanningClient;
pub use codes_of_conduct::CodesOfConductClient;
pub use dependabot::DependabotClient;
pub use emojis::EmojisClient;
pub use error::{Error, GithubClientError, GithubClientErrorType, Result};
pub use gists::GistsClient;
pub use git::GitClient;
pub use gitignore::GitignoreClient;
pub use interactions::InteractionsClient;
pub use issues::IssuesClient;
pub use licenses::LicensesClient;
pub use markdown::MarkdownClient;
pub use meta::MetaClient;
pub use migrations::MigrationsClient;
pub use orgs::OrgsClient;
pub use packages::PackagesClient;
pub use params::{substitute, value_to_string, Params, Sanitized};
pub use projects::ProjectsClient;
pub use pulls::PullsClient;
pub use rate_limit::{Rate, RateLimitClient};
pub use reactions::ReactionsClient;
pub use repos::RepositoryClient;
pub use response::Response;
pub use search::SearchClient;
pub use secret_scanning::SecretScanningClient;
pub use teams::TeamsClient;
pub use users::UsersClient;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

const HEADER_API_VERSION: &str = "X-GitHub-Api-Version";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";
const HEADER_RATE_USED: &str = "X-RateLimit-Used";

const MEDIA_TYPE_GITHUB_JSON: &str = "application/vnd.github+json";

const ENV_TOKEN: &str = "GITHUB_TOKEN";
const ENV_API_URL: &str = "GITHUB_API_URL";

/// The HTTP verbs the API is driven with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method().as_str())
    }
}

#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    github_api_token: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the environment: `GITHUB_TOKEN` for the token and `GITHUB_API_URL` for the
    /// base url, when they are set.
    pub fn from_env() -> Self {
        let mut builder = Self::new();

        // CI runners commonly export these as empty strings
        if let Some(token) = std::env::var(ENV_TOKEN).ok().filter(|t| !t.is_empty()) {
            builder = builder.github_api_token(token);
        }

        if let Some(base_url) = std::env::var(ENV_API_URL).ok().filter(|u| !u.is_empty()) {
            builder = builder.base_url(base_url);
        }

        builder
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn api_version<S: Into<String>>(mut self, api_version: S) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Deadline for each request, enforced by the transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn github_api_token<S: Into<String>>(mut self, github_api_token: S) -> Self {
        self.github_api_token = Some(github_api_token.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = Url::parse(base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("unsupported base url scheme `{}`", url.scheme()).into());
        }
        let base_url = base_url.trim_end_matches('/').to_owned();

        let user_agent = self.user_agent.as_deref().unwrap_or(USER_AGENT);
        let api_version = self.api_version.as_deref().unwrap_or(API_VERSION);

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(user_agent)?);
        headers.insert(HEADER_API_VERSION, HeaderValue::from_str(api_version)?);
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(MEDIA_TYPE_GITHUB_JSON),
        );

        if let Some(token) = &self.github_api_token {
            if token.is_empty() {
                return Err("github api token is empty".into());
            }

            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let mut client_builder = ReqwestClient::builder();
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let client = client_builder.build()?;

        Ok(Client {
            base_url,
            headers,
            client,
        })
    }
}

/// The request builder every API area goes through.
///
/// A `Client` carries its own configuration: base url, default headers and the bearer token.
/// Each call substitutes the route template, drops null parameters and performs exactly one HTTP
/// request. The response comes back as-is whatever its status; only transport failures are
/// errors.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API, but can be
    /// overridden for use with GitHub Enterprise. Never has a trailing slash.
    base_url: String,

    /// Headers sent with every request, `Authorization` included
    headers: HeaderMap,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    /// A client with the default configuration, authenticated with `token`. No request is made.
    pub fn new(token: &str) -> Result<Self> {
        ClientBuilder::new().github_api_token(token).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub async fn get(&self, route: &str, params: Params, replacements: Params) -> Result<Response> {
        self.request(Verb::Get, route, params, replacements).await
    }

    pub async fn post(
        &self,
        route: &str,
        params: Params,
        replacements: Params,
    ) -> Result<Response> {
        self.request(Verb::Post, route, params, replacements).await
    }

    pub async fn patch(
        &self,
        route: &str,
        params: Params,
        replacements: Params,
    ) -> Result<Response> {
        self.request(Verb::Patch, route, params, replacements).await
    }

    pub async fn put(&self, route: &str, params: Params, replacements: Params) -> Result<Response> {
        self.request(Verb::Put, route, params, replacements).await
    }

    pub async fn delete(
        &self,
        route: &str,
        params: Params,
        replacements: Params,
    ) -> Result<Response> {
        self.request(Verb::Delete, route, params, replacements).await
    }

    /// Perform one request against `route`.
    ///
    /// `replacements` fill the route's placeholders. `params` go in the query string for
    /// [`Verb::Get`] and in a JSON object body otherwise; a `DELETE` left without parameters
    /// after sanitizing is sent without a body.
    pub async fn request(
        &self,
        verb: Verb,
        route: &str,
        params: Params,
        replacements: Params,
    ) -> Result<Response> {
        let params = params.sanitize();

        match verb {
            Verb::Get => self.send(verb, route, &replacements, &params, None).await,
            Verb::Delete if params.is_empty() => {
                self.send(verb, route, &replacements, &params, None).await
            }
            Verb::Post | Verb::Patch | Verb::Put | Verb::Delete => {
                self.send(verb, route, &replacements, &Sanitized::default(), Some(&params))
                    .await
            }
        }
    }

    /// `DELETE` for the few endpoints that read their parameters from the query string rather
    /// than the body. No body is sent.
    pub async fn delete_with_query(
        &self,
        route: &str,
        query: Params,
        replacements: Params,
    ) -> Result<Response> {
        self.send(Verb::Delete, route, &replacements, &query.sanitize(), None)
            .await
    }

    async fn send(
        &self,
        verb: Verb,
        route: &str,
        replacements: &Params,
        query: &Sanitized,
        body: Option<&Sanitized>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, substitute(route, replacements));

        debug!("Github Request: {} {}", verb, url);

        let mut request = self
            .client
            .request(verb.method(), &url)
            .headers(self.headers.clone());

        // reqwest percent-encodes query values, so `&`, `+` or `#` can't leak into the url
        if !query.is_empty() {
            request = request.query(&query.query_pairs());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Response::from_reqwest(response).await
    }
}

/// Entry point to the API, one accessor per area.
///
/// Every accessor builds a new facade around a copy of this client's configuration; nothing is
/// cached between calls.
#[derive(Clone, Debug)]
pub struct GitHub {
    client: Client,
}

impl GitHub {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from)
    }

    /// See [`ClientBuilder::from_env`]
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_env().build().map(Self::from)
    }

    /// A raw request builder, for endpoints without a facade method.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn actions(&self) -> ActionsClient {
        ActionsClient::from_client(self.client())
    }

    pub fn activity(&self) -> ActivityClient {
        ActivityClient::from_client(self.client())
    }

    pub fn apps(&self) -> AppsClient {
        AppsClient::from_client(self.client())
    }

    pub fn billing(&self) -> BillingClient {
        BillingClient::from_client(self.client())
    }

    pub fn checks(&self) -> ChecksClient {
        ChecksClient::from_client(self.client())
    }

    pub fn code_scanning(&self) -> CodeScanningClient {
        CodeScanningClient::from_client(self.client())
    }

    pub fn codes_of_conduct(&self) -> CodesOfConductClient {
        CodesOfConductClient::from_client(self.client())
    }

    pub fn dependabot(&self) -> DependabotClient {
        DependabotClient::from_client(self.client())
    }

    pub fn emojis(&self) -> EmojisClient {
        EmojisClient::from_client(self.client())
    }

    pub fn gists(&self) -> GistsClient {
        GistsClient::from_client(self.client())
    }

    pub fn git(&self) -> GitClient {
        GitClient::from_client(self.client())
    }

    pub fn gitignore(&self) -> GitignoreClient {
        GitignoreClient::from_client(self.client())
    }

    pub fn interactions(&self) -> InteractionsClient {
        InteractionsClient::from_client(self.client())
    }

    pub fn issues(&self) -> IssuesClient {
        IssuesClient::from_client(self.client())
    }

    pub fn licenses(&self) -> LicensesClient {
        LicensesClient::from_client(self.client())
    }

    pub fn markdown(&self) -> MarkdownClient {
        MarkdownClient::from_client(self.client())
    }

    pub fn meta(&self) -> MetaClient {
        MetaClient::from_client(self.client())
    }

    pub fn migrations(&self) -> MigrationsClient {
        MigrationsClient::from_client(self.client())
    }

    pub fn orgs(&self) -> OrgsClient {
        OrgsClient::from_client(self.client())
    }

    pub fn packages(&self) -> PackagesClient {
        PackagesClient::from_client(self.client())
    }

    pub fn projects(&self) -> ProjectsClient {
        ProjectsClient::from_client(self.client())
    }

    pub fn pulls(&self) -> PullsClient {
        PullsClient::from_client(self.client())
    }

    pub fn rate_limit(&self) -> RateLimitClient {
        RateLimitClient::from_client(self.client())
    }

    pub fn reactions(&self) -> ReactionsClient {
        ReactionsClient::from_client(self.client())
    }

    pub fn repos(&self) -> RepositoryClient {
        RepositoryClient::from_client(self.client())
    }

    pub fn search(&self) -> SearchClient {
        SearchClient::from_client(self.client())
    }

    pub fn secret_scanning(&self) -> SecretScanningClient {
        SecretScanningClient::from_client(self.client())
    }

    pub fn teams(&self) -> TeamsClient {
        TeamsClient::from_client(self.client())
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::from_client(self.client())
    }
}

impl From<Client> for GitHub {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[cfg(test)]
mod test {
    use super::{Client, Error, GitHub, Verb, API_VERSION, HEADER_API_VERSION, USER_AGENT};
    use reqwest::{header, Method};

    #[test]
    fn verbs() {
        assert_eq!(Verb::Get.method(), Method::GET);
        assert_eq!(Verb::Delete.method(), Method::DELETE);
        assert_eq!(Verb::Patch.to_string(), "PATCH");
    }

    #[test]
    fn default_headers() {
        let client = Client::new("t0ken").unwrap();
        let headers = client.default_headers();

        assert_eq!(client.base_url(), "https://api.github.com");
        assert_eq!(headers[header::USER_AGENT], USER_AGENT);
        assert_eq!(headers[HEADER_API_VERSION], API_VERSION);
        assert_eq!(headers[header::ACCEPT], "application/vnd.github+json");
        assert_eq!(headers[header::AUTHORIZATION], "Bearer t0ken");
        assert!(headers[header::AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn token_is_not_debug_printed() {
        let client = Client::new("hunter2").unwrap();
        assert!(!format!("{:?}", client).contains("hunter2"));
    }

    #[test]
    fn overrides() {
        let client = Client::builder()
            .base_url("https://github.example.com/api/v3/")
            .user_agent("acme-bot")
            .api_version("2099-01-01")
            .build()
            .unwrap();
        let headers = client.default_headers();

        assert_eq!(client.base_url(), "https://github.example.com/api/v3");
        assert_eq!(headers[header::USER_AGENT], "acme-bot");
        assert_eq!(headers[HEADER_API_VERSION], "2099-01-01");
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn factory_hands_out_copies() {
        let client = Client::builder()
            .base_url("https://github.example.com/api/v3")
            .build()
            .unwrap();
        let github = GitHub::from(client);

        let a = github.client();
        let b = github.client();
        assert_eq!(a.base_url(), "https://github.example.com/api/v3");
        assert_eq!(a.base_url(), b.base_url());

        // Facades hold their own copy; dropping the factory doesn't affect them
        let issues = github.issues();
        let pulls = github.pulls();
        drop(github);
        assert!(format!("{:?}", issues).contains("github.example.com"));
        assert!(format!("{:?}", pulls).contains("github.example.com"));
    }

    #[test]
    fn invalid_configuration() {
        assert!(matches!(
            Client::builder().base_url("not a url").build(),
            Err(Error::Url(_))
        ));
        assert!(matches!(
            Client::new("bad\ntoken"),
            Err(Error::InvalidHeader(_))
        ));

        let e = Client::new("").unwrap_err();
        assert!(matches!(e, Error::Message(_)));
        assert_eq!(e.to_string(), "`github api token is empty`");

        let e = Client::builder()
            .base_url("ftp://github.example.com")
            .build()
            .unwrap_err();
        assert_eq!(e.to_string(), "`unsupported base url scheme `ftp``");
    }
}

use github_rest::{
    client::{Error, IssuesClient},
    Client, GitHub, Params, Verb,
};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{any, body_json, header, method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

async fn setup() -> (MockServer, GitHub) {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    let client = Client::builder()
        .base_url(server.uri())
        .github_api_token("t0ken")
        .build()
        .unwrap();

    (server, GitHub::from(client))
}

async fn respond_ok(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(server)
        .await;
}

async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

fn body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[tokio::test]
async fn get_issue() {
    let (server, github) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/a/b/issues/5"))
        .and(header("authorization", "Bearer t0ken"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header("x-github-api-version", "2022-11-28"))
        .and(header("user-agent", concat!("github-rest/", env!("CARGO_PKG_VERSION"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 5 })))
        .expect(1)
        .mount(&server)
        .await;

    let response = github.issues().get("a", "b", 5).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.value().unwrap()["number"], 5);

    let request = only_request(&server).await;
    assert!(request.body.is_empty());
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn get_sends_sanitized_query() {
    let (server, github) = setup().await;
    respond_ok(&server).await;

    let params = Params::new()
        .null("state")
        .set("per_page", 0)
        .set("labels", "")
        .set("sort", "updated");
    github.issues().list_for_repo("a", "b", params).await.unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.path(), "/repos/a/b/issues");
    assert!(request.body.is_empty());

    let query: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
    assert_eq!(
        query,
        vec![
            ("per_page".to_owned(), "0".to_owned()),
            ("labels".to_owned(), String::new()),
            ("sort".to_owned(), "updated".to_owned()),
        ]
    );
}

#[tokio::test]
async fn get_joins_array_values() {
    let (server, github) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/a/b/issues"))
        .and(query_param("labels", "bug,ui"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let response = github
        .issues()
        .list_for_repo("a", "b", Params::new().set("labels", vec!["bug", "ui"]))
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn post_sends_json_body() {
    let (server, github) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/a/b/issues"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "Found a bug",
            "labels": ["bug"],
            "milestone": 0,
            "draft": false,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "number": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new()
        .set("title", "Found a bug")
        .null("body")
        .set("labels", vec!["bug"])
        .set("milestone", 0)
        .set("draft", false);
    let response = github.issues().create("a", "b", params).await.unwrap();
    assert_eq!(response.status(), 201);

    // Keys keep the order they were given in
    let request = only_request(&server).await;
    assert_eq!(
        std::str::from_utf8(&request.body).unwrap(),
        r#"{"title":"Found a bug","labels":["bug"],"milestone":0,"draft":false}"#
    );
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn patch_and_put_send_bodies() {
    let (server, github) = setup().await;
    respond_ok(&server).await;

    github
        .issues()
        .update(
            "a",
            "b",
            5,
            Params::new().set("milestone", Value::Null).null("title"),
        )
        .await
        .unwrap();
    github
        .issues()
        .set_labels("a", "b", 5, Params::new().set("labels", vec!["bug"]))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method.to_string(), "PATCH");
    assert_eq!(requests[0].url.path(), "/repos/a/b/issues/5");
    assert_eq!(body(&requests[0]), json!({ "milestone": null }));

    assert_eq!(requests[1].method.to_string(), "PUT");
    assert_eq!(requests[1].url.path(), "/repos/a/b/issues/5/labels");
    assert_eq!(body(&requests[1]), json!({ "labels": ["bug"] }));
}

#[tokio::test]
async fn put_without_params_sends_empty_object() {
    let (server, github) = setup().await;
    respond_ok(&server).await;

    github
        .activity()
        .star_repo_for_authenticated_user("a", "b")
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.method.to_string(), "PUT");
    assert_eq!(request.url.path(), "/user/starred/a/b");
    assert_eq!(body(&request), json!({}));
}

#[tokio::test]
async fn delete_body_only_when_params_survive() {
    let (server, github) = setup().await;
    respond_ok(&server).await;

    github.issues().delete_comment("a", "b", 9).await.unwrap();
    github
        .issues()
        .remove_assignees(
            "a",
            "b",
            5,
            Params::new().set("assignees", vec!["octocat"]),
        )
        .await
        .unwrap();
    github
        .issues()
        .remove_assignees("a", "b", 5, Params::new().null("assignees"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);

    assert_eq!(requests[0].method.to_string(), "DELETE");
    assert_eq!(requests[0].url.path(), "/repos/a/b/issues/comments/9");
    assert!(requests[0].body.is_empty());

    assert_eq!(requests[1].url.path(), "/repos/a/b/issues/5/assignees");
    assert_eq!(body(&requests[1]), json!({ "assignees": ["octocat"] }));

    assert!(requests[2].body.is_empty());
}

#[tokio::test]
async fn not_found_is_returned() {
    let (server, github) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/a/b/pulls/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/pulls/pulls#get-a-pull-request",
        })))
        .mount(&server)
        .await;

    let response = github.pulls().get("a", "b", 7).await.unwrap();
    assert_eq!(response.status(), 404);
    assert!(!response.is_success());
    assert_eq!(response.value().unwrap()["message"], "Not Found");
    assert_eq!(
        response.client_error().unwrap().message.as_deref(),
        Some("Not Found")
    );
}

#[tokio::test]
async fn server_error_is_returned() {
    let (server, github) = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let response = github.users().get_authenticated().await.unwrap();
    assert_eq!(response.status(), 502);
    assert!(response.value().is_none());
}

#[tokio::test]
async fn route_placeholders() {
    let (server, github) = setup().await;
    respond_ok(&server).await;

    github
        .repos()
        .get_content(
            "a",
            "b",
            "docs/guide/README.md",
            Params::new().set("ref", "main"),
        )
        .await
        .unwrap();
    github
        .checks()
        .list_for_ref("a", "b", "heads/main", Params::new())
        .await
        .unwrap();
    github
        .actions()
        .delete_actions_cache_by_key("a", "b", Params::new().set("key", "npm-cache"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/repos/a/b/contents/docs/guide/README.md");
    assert_eq!(requests[0].url.query(), Some("ref=main"));
    assert_eq!(requests[1].url.path(), "/repos/a/b/commits/heads/main/check-runs");
    assert_eq!(requests[2].url.path(), "/repos/a/b/actions/caches");
    assert_eq!(requests[2].url.query(), Some("key=npm-cache"));
    assert!(requests[2].body.is_empty());
}

#[tokio::test]
async fn delete_query_values_are_encoded() {
    let (server, github) = setup().await;
    respond_ok(&server).await;

    let key = "linux-node&v=2+x#1";
    github
        .actions()
        .delete_actions_cache_by_key(
            "a",
            "b",
            Params::new().set("key", key).set("ref", "refs/heads/main"),
        )
        .await
        .unwrap();
    github
        .code_scanning()
        .delete_analysis("a", "b", 41, Params::new().set("confirm_delete", true))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method.to_string(), "DELETE");
    assert_eq!(requests[0].url.path(), "/repos/a/b/actions/caches");
    let query: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(
        query,
        vec![
            ("key".to_owned(), key.to_owned()),
            ("ref".to_owned(), "refs/heads/main".to_owned()),
        ]
    );
    assert!(requests[0].body.is_empty());

    assert_eq!(requests[1].url.path(), "/repos/a/b/code-scanning/analyses/41");
    assert_eq!(requests[1].url.query(), Some("confirm_delete=true"));
    assert!(requests[1].body.is_empty());
}

#[tokio::test]
async fn raw_client_request() {
    let (server, github) = setup().await;
    respond_ok(&server).await;

    github
        .client()
        .request(
            Verb::Post,
            "/repos/{owner}/{repo}/dispatches",
            Params::new().set("event_type", "deploy"),
            Params::new().set("owner", "a").set("repo", "b"),
        )
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.method.to_string(), "POST");
    assert_eq!(request.url.path(), "/repos/a/b/dispatches");
    assert_eq!(body(&request), json!({ "event_type": "deploy" }));
}

#[tokio::test]
async fn rate_headers_are_exposed() {
    let (server, github) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-limit", "5000")
                .insert_header("x-ratelimit-remaining", "4999")
                .insert_header("x-ratelimit-used", "1")
                .insert_header("x-ratelimit-reset", "1372700873")
                .set_body_json(json!({ "resources": {} })),
        )
        .mount(&server)
        .await;

    let response = github.rate_limit().get().await.unwrap();
    let rate = response.rate();
    assert_eq!(rate.limit, 5000);
    assert_eq!(rate.remaining, 4999);
    assert_eq!(rate.used, 1);
    assert_eq!(rate.reset, 1372700873);
}

#[tokio::test]
async fn unauthenticated_client_sends_no_authorization() {
    let server = MockServer::start().await;
    respond_ok(&server).await;

    let github = GitHub::from(Client::builder().base_url(server.uri()).build().unwrap());
    github.meta().get_zen().await.unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.path(), "/zen");
    assert!(!request
        .headers
        .keys()
        .any(|name| name.as_str().eq_ignore_ascii_case("authorization")));
}

#[tokio::test]
async fn timeout_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .github_api_token("t0ken")
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let result = GitHub::from(client).emojis().get().await;
    assert!(matches!(result, Err(Error::Reqwest(e)) if e.is_timeout()));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on a port once its listener is gone
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = Client::builder()
        .base_url(format!("http://127.0.0.1:{}", port))
        .github_api_token("t0ken")
        .build()
        .unwrap();

    let result = GitHub::from(client).users().get_by_username("octocat").await;
    assert!(matches!(result, Err(Error::Reqwest(_))));
}

#[test]
fn facades_construct_without_io() {
    assert!(IssuesClient::new("t0ken").is_ok());
    assert!(GitHub::new("t0ken").is_ok());
    assert!(matches!(
        IssuesClient::new("t0\nken"),
        Err(Error::InvalidHeader(_))
    ));
}

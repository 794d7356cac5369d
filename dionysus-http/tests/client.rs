use dionysus_http::{Auth, HttpClient, HttpError, RequestOpts};
use serde::Deserialize;
use std::borrow::Cow;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Echo {
    ok: bool,
}

#[tokio::test]
async fn get_text_returns_html_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Some_Page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let body = client
        .get_text("wiki/Some_Page", RequestOpts::default())
        .await
        .unwrap();
    assert_eq!(body, "<html>hi</html>");
}

#[tokio::test]
async fn non_success_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Missing"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let err = client
        .get_text("wiki/Missing", RequestOpts::default())
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    assert!(matches!(err, HttpError::Api { .. }));
}

#[tokio::test]
async fn query_auth_is_sent_alongside_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "cats"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .mount(&server)
        .await;

    let client = HttpClient::new(&format!("{}/", server.uri())).unwrap();
    let got: Echo = client
        .get_json(
            "search",
            RequestOpts {
                query: Some(vec![("q", Cow::Borrowed("cats"))]),
                auth: Some(Auth::Query {
                    name: "key",
                    value: Cow::Borrowed("secret"),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(got.ok);
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let err = client
        .get_json::<Echo>("anything", RequestOpts::default())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Decode(_, snippet) if snippet == "not json"));
}

//! Exercises the HTTP client against an in-process stand-in for the
//! completions endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use bartender_openai::client::{CompletionApi, OpenAiClient, OpenAiConfig};
use bartender_openai::completion::CompletionRequest;
use bartender_openai::error::GenerationError;

#[derive(Clone, Debug)]
struct Captured {
    engine: String,
    authorization: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    delay: Duration,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn completions(
    State(upstream): State<Upstream>,
    Path(engine): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    upstream.captured.lock().unwrap().push(Captured {
        engine,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if !upstream.delay.is_zero() {
        tokio::time::sleep(upstream.delay).await;
    }

    (
        upstream.status,
        [("content-type", "application/json")],
        upstream.body.clone(),
    )
}

/// Serve `body` with `status` on an ephemeral port; returns the base URL.
async fn spawn_upstream(status: StatusCode, body: &str, delay: Duration) -> (String, Upstream) {
    let upstream = Upstream {
        status,
        body: body.to_string(),
        delay,
        captured: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/v1/engines/{engine}/completions", post(completions))
        .with_state(upstream.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1"), upstream)
}

fn client(base_url: String, timeout: Duration) -> OpenAiClient {
    OpenAiClient::new(OpenAiConfig {
        api_key: "sk-test".to_string(),
        base_url,
        timeout,
    })
    .unwrap()
}

#[tokio::test]
async fn sends_engine_auth_and_sampling_parameters() {
    let reply = json!({
        "id": "cmpl-1",
        "object": "text_completion",
        "choices": [{ "text": " Rum Sunrise: ...", "index": 0, "finish_reason": "stop" }]
    });
    let (base_url, upstream) =
        spawn_upstream(StatusCode::OK, &reply.to_string(), Duration::ZERO).await;

    let request = CompletionRequest::cocktail("prompt text".to_string());
    let completion = client(base_url, Duration::from_secs(5))
        .complete("davinci", &request)
        .await
        .unwrap();

    assert_eq!(completion.id.as_deref(), Some("cmpl-1"));
    assert_eq!(completion.into_first_text().unwrap(), " Rum Sunrise: ...");

    let captured = upstream.captured.lock().unwrap().clone();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].engine, "davinci");
    assert_eq!(captured[0].authorization.as_deref(), Some("Bearer sk-test"));

    let body = &captured[0].body;
    assert_eq!(body["prompt"], "prompt text");
    assert_eq!(body["max_tokens"], 100);
    assert_eq!(body["temperature"], 0.9);
    assert_eq!(body["top_p"], 1.0);
    assert_eq!(body["presence_penalty"], 0.0);
    assert_eq!(body["frequency_penalty"], 0.0);
    assert_eq!(body["best_of"], 1);
    assert_eq!(body["n"], 1);
    assert_eq!(body["stream"], false);
    assert_eq!(body["stop"], json!(["\n"]));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let reply = json!({ "choices": [{ "text": "0" }] });
    let (base_url, upstream) =
        spawn_upstream(StatusCode::OK, &reply.to_string(), Duration::ZERO).await;

    let request = CompletionRequest::content_filter("label me".to_string());
    client(format!("{base_url}/"), Duration::from_secs(5))
        .complete("content-filter-alpha-c4", &request)
        .await
        .unwrap();

    assert_eq!(
        upstream.captured.lock().unwrap()[0].engine,
        "content-filter-alpha-c4"
    );
}

#[tokio::test]
async fn error_status_unwraps_api_message() {
    let reply = json!({ "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" } });
    let (base_url, _) =
        spawn_upstream(StatusCode::UNAUTHORIZED, &reply.to_string(), Duration::ZERO).await;

    let request = CompletionRequest::cocktail("x".to_string());
    let err = client(base_url, Duration::from_secs(5))
        .complete("davinci", &request)
        .await
        .unwrap_err();

    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_with_plain_body_keeps_body() {
    let (base_url, _) =
        spawn_upstream(StatusCode::BAD_GATEWAY, "upstream down", Duration::ZERO).await;

    let request = CompletionRequest::cocktail("x".to_string());
    let err = client(base_url, Duration::from_secs(5))
        .complete("davinci", &request)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GenerationError::Api { status: 502, ref message } if message == "upstream down"
    ));
}

#[tokio::test]
async fn body_without_choices_is_malformed() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, r#"{"object":"list"}"#, Duration::ZERO).await;

    let request = CompletionRequest::cocktail("x".to_string());
    let err = client(base_url, Duration::from_secs(5))
        .complete("davinci", &request)
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::ResponseParse(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let reply = json!({ "choices": [{ "text": "late" }] });
    let (base_url, _) =
        spawn_upstream(StatusCode::OK, &reply.to_string(), Duration::from_secs(5)).await;

    let request = CompletionRequest::cocktail("x".to_string());
    let err = client(base_url, Duration::from_millis(200))
        .complete("davinci", &request)
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Timeout(d) if d == Duration::from_millis(200)));
}

#[tokio::test]
async fn unreachable_upstream_is_a_request_error() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let request = CompletionRequest::cocktail("x".to_string());
    let err = client(format!("http://{addr}/v1"), Duration::from_secs(5))
        .complete("davinci", &request)
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Request(_)));
}

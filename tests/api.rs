use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{ to_bytes, Body };
use axum::http::{ Request, StatusCode };
use serde_json::{ json, Value };
use tower::ServiceExt;

use cryenx_support_agent::agent::SupportAgent;
use cryenx_support_agent::config::prompt::AssemblyMode;
use cryenx_support_agent::llm::chat::ChatClient;
use cryenx_support_agent::llm::{ LlmError, ModelRequest };
use cryenx_support_agent::server::api::router;

struct MockChatClient {
    calls: AtomicUsize,
    reply: Result<String, (u16, String)>,
}

impl MockChatClient {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self { calls: AtomicUsize::new(0), reply: Ok(text.to_string()) })
    }

    fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: Err((status, body.to_string())),
        })
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, _request: &ModelRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, body)) => Err(LlmError::Upstream {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

fn chat_request(messages: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "messages": messages }).to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_route_answers_ok() {
    let agent = Arc::new(SupportAgent::with_client(None, AssemblyMode::Structured));
    let response = router(agent)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn chat_returns_rendered_result() {
    let mock = MockChatClient::replying("output: Reach us at https://www.cryenx.com/contact");
    let agent = Arc::new(
        SupportAgent::with_client(Some(mock.clone() as Arc<dyn ChatClient>), AssemblyMode::Structured)
    );

    let response = router(agent)
        .oneshot(chat_request(json!([{ "sender": "user", "text": "contact?" }]))).await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let result = body["result"].as_str().unwrap();
    assert!(result.contains("<a href=\"https://www.cryenx.com/contact\">"), "{result}");
    assert!(!result.contains("output:"));
    assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_api_key_is_a_configuration_error_with_no_upstream_call() {
    let agent = Arc::new(SupportAgent::with_client(None, AssemblyMode::Structured));

    let response = router(agent)
        .oneshot(chat_request(json!([{ "sender": "user", "text": "hi" }]))).await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Gemini API key not configured");
}

#[tokio::test]
async fn recall_question_is_answered_without_the_model() {
    let mock = MockChatClient::replying("unused");
    let agent = Arc::new(
        SupportAgent::with_client(Some(mock.clone() as Arc<dyn ChatClient>), AssemblyMode::Structured)
    );

    let response = router(agent)
        .oneshot(chat_request(json!([{ "sender": "user", "text": "what was my last message?" }])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["result"].as_str().unwrap().contains("previous messages"));
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_server_error_maps_to_the_friendly_retry_message() {
    let mock = MockChatClient::failing(500, "internal error");
    let agent = Arc::new(SupportAgent::with_client(Some(mock as Arc<dyn ChatClient>), AssemblyMode::Structured));

    let response = router(agent)
        .oneshot(chat_request(json!([{ "sender": "user", "text": "hi" }]))).await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Oops, I think the message hasn't reached us. Please try again."
    );
}

#[tokio::test]
async fn other_upstream_errors_keep_their_details() {
    let mock = MockChatClient::failing(400, "invalid request payload");
    let agent = Arc::new(SupportAgent::with_client(Some(mock as Arc<dyn ChatClient>), AssemblyMode::Structured));

    let response = router(agent)
        .oneshot(chat_request(json!([{ "sender": "user", "text": "hi" }]))).await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Error: "));
    assert!(error.contains("invalid request payload"));
}

#[tokio::test]
async fn malformed_body_maps_to_the_json_error_contract() {
    let agent = Arc::new(SupportAgent::with_client(None, AssemblyMode::Structured));

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from("{\"messages\": not json"))
        .unwrap();
    let response = router(agent).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Error: "));
}

#[tokio::test]
async fn parenthesized_url_in_the_reply_is_linked() {
    let mock = MockChatClient::replying(
        "Join our server (https://discord.com/invite/yGqSnBCdUW) today"
    );
    let agent = Arc::new(
        SupportAgent::with_client(Some(mock.clone() as Arc<dyn ChatClient>), AssemblyMode::Structured)
    );

    let response = router(agent)
        .oneshot(chat_request(json!([{ "sender": "user", "text": "discord?" }]))).await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let result = body["result"].as_str().unwrap();
    assert!(
        result.contains("<a href=\"https://discord.com/invite/yGqSnBCdUW\">"),
        "URL left bare: {result}"
    );
}

#[tokio::test]
async fn empty_transcript_still_reaches_the_model() {
    let mock = MockChatClient::replying("Hello! Welcome to CRYENX LABS.");
    let agent = Arc::new(
        SupportAgent::with_client(Some(mock.clone() as Arc<dyn ChatClient>), AssemblyMode::Flattened)
    );

    let response = router(agent).oneshot(chat_request(json!([]))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
}

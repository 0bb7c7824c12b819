use linkup_provider::{LlmProvider, LlmRequest, OpenRouterProvider};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn chat_sends_bearer_auth_and_reads_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "openai/gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": "You are an event assistant AI."},
                {"role": "user", "content": "who did I meet?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("You met alice99.")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new("test-key", server.uri());
    let req = LlmRequest::simple(
        "openai/gpt-3.5-turbo".into(),
        Some("You are an event assistant AI.".into()),
        "who did I meet?".into(),
    );
    let resp = provider.chat(req).await.unwrap();
    assert_eq!(resp.text, "You met alice99.");
}

#[tokio::test]
async fn provider_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": {"message": "upstream down"}})),
        )
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new("test-key", server.uri());
    let req = LlmRequest::simple("m".into(), None, "hi".into());
    let err = provider.chat(req).await.unwrap_err();
    assert!(err.to_string().contains("500"));
    assert!(err.to_string().contains("upstream down"));
}

#[tokio::test]
async fn missing_content_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new("test-key", server.uri());
    let req = LlmRequest::simple("m".into(), None, "hi".into());
    let err = provider.chat(req).await.unwrap_err();
    assert!(err.to_string().contains("no content"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("ok")))
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new("k", format!("{}/", server.uri()));
    let req = LlmRequest::simple("m".into(), None, "hi".into());
    assert_eq!(provider.chat(req).await.unwrap().text, "ok");
}

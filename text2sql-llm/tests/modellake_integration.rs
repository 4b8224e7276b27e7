use text2sql_llm::{ChatRequest, CompletionClient, LlmError, Message, ModelLakeClient};

fn sample_request() -> ChatRequest {
    ChatRequest::new(vec![
        Message::system("You are an AI specializing in converting English questions into SQL queries."),
        Message::user("How many orders were placed last week?"),
    ])
}

#[tokio::test]
async fn chat_complete_returns_answer_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/complete")
        .match_header("x-api-key", "test-key")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"answer": "Sure: SELECT COUNT(*) FROM orders;"}"#)
        .create_async()
        .await;

    let client = ModelLakeClient::new(server.url(), "test-key").unwrap();
    let response = client.chat_complete(sample_request()).await.unwrap();

    assert_eq!(response.answer, "Sure: SELECT COUNT(*) FROM orders;");
    mock.assert_async().await;
}

#[tokio::test]
async fn chat_complete_sends_messages_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/complete")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "messages": [
                {"role": "system"},
                {"role": "user", "content": "How many orders were placed last week?"}
            ]
        })))
        .with_status(200)
        .with_body(r#"{"answer": "SELECT 1;"}"#)
        .create_async()
        .await;

    let client = ModelLakeClient::new(server.url(), "test-key").unwrap();
    client.chat_complete(sample_request()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/complete")
        .with_status(401)
        .with_body("bad key")
        .create_async()
        .await;

    let client = ModelLakeClient::new(server.url(), "test-key").unwrap();
    let err = client.chat_complete(sample_request()).await.unwrap_err();
    match err {
        LlmError::Authentication { message } => assert_eq!(message, "bad key"),
        other => panic!("Expected authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/complete")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let client = ModelLakeClient::new(server.url(), "test-key").unwrap();
    let err = client.chat_complete(sample_request()).await.unwrap_err();
    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "overloaded");
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_answer_maps_to_internal_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/complete")
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let client = ModelLakeClient::new(server.url(), "test-key").unwrap();
    let err = client.chat_complete(sample_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::Internal { .. }));
}

#[test]
fn empty_api_key_is_rejected() {
    let result = ModelLakeClient::new("https://api.example.com", "");
    assert!(matches!(result, Err(LlmError::Authentication { .. })));
}

// Live test against a real ModelLake endpoint.
// Run with: MODELLAKE_BASE_URL=... MODELLAKE_API_KEY=... cargo test --test modellake_integration -- --ignored
#[tokio::test]
#[ignore] // Run manually with credentials
async fn test_real_api_call() {
    let base_url = std::env::var("MODELLAKE_BASE_URL").expect("MODELLAKE_BASE_URL not set");
    let api_key = std::env::var("MODELLAKE_API_KEY").expect("MODELLAKE_API_KEY not set");

    let client = ModelLakeClient::new(base_url, api_key).unwrap();
    let response = client.chat_complete(sample_request()).await;

    assert!(response.is_ok());
    assert!(!response.unwrap().answer.is_empty());
}

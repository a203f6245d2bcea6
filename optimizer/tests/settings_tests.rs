use prompt_optimizer::{
    ConnectionTestResult, CredentialStore, MemoryStore, Settings,
};
use siliconflow_sdk::{siliconflow_sdk_test::MockChatModel, CompletionError, CompletionOutput};
use std::sync::Arc;

fn settings_with(model: Arc<MockChatModel>) -> Settings {
    let store = Arc::new(MemoryStore::new());
    Settings::new(CredentialStore::new(store, None), model)
}

#[tokio::test]
async fn save_api_key_trims_and_persists() {
    let settings = settings_with(Arc::new(MockChatModel::new()));

    settings.save_api_key("  sk-abc  ");
    assert_eq!(settings.saved_api_key(), Some("sk-abc".to_string()));

    settings.save_api_key("   ");
    assert_eq!(settings.saved_api_key(), Some("sk-abc".to_string()));
}

#[tokio::test]
async fn test_connection_sends_minimal_probe() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue_complete(CompletionOutput {
        content: "Hi".to_string(),
        usage: None,
    });

    let settings = settings_with(model.clone());
    let result = settings.test_connection("sk-candidate").await;

    assert_eq!(result, ConnectionTestResult::Ok);
    assert_eq!(model.tracked_api_keys(), vec!["sk-candidate".to_string()]);

    let inputs = model.tracked_inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].messages.len(), 1);
    assert_eq!(inputs[0].messages[0].content, "Hello");
    assert_eq!(inputs[0].max_tokens, Some(5));
    assert_eq!(inputs[0].temperature, None);
}

#[tokio::test]
async fn test_connection_reports_remote_failure() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue_complete(CompletionError::StatusCode(
        reqwest::StatusCode::UNAUTHORIZED,
        r#"{"error":{"message":"invalid key"}}"#.to_string(),
    ));

    let settings = settings_with(model.clone());
    let result = settings.test_connection("sk-bad").await;

    match result {
        ConnectionTestResult::Failed { message } => {
            assert!(message.contains("401"), "message: {message}");
        }
        ConnectionTestResult::Ok => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_connection_rejects_blank_secret_without_calling_out() {
    let model = Arc::new(MockChatModel::new());
    let settings = settings_with(model.clone());

    let result = settings.test_connection("   ").await;

    assert!(matches!(result, ConnectionTestResult::Failed { .. }));
    assert!(model.tracked_inputs().is_empty());
}

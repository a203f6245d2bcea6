use prompt_optimizer::{
    KeyValueStore, MemoryStore, OptimizationMode, OptimizeError, PromptOptimizer,
    PromptOptimizerParams, API_KEY_STORAGE_KEY, SYSTEM_PREAMBLE,
};
use siliconflow_sdk::{
    siliconflow_sdk_test::MockChatModel, CompletionError, CompletionOutput, MessageRole,
    ResponseFormat,
};
use std::{collections::HashSet, sync::Arc};

fn optimizer_with(
    model: Arc<MockChatModel>,
    fallback_api_key: Option<String>,
) -> (PromptOptimizer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let params = PromptOptimizerParams::new(model, store.clone())
        .with_fallback_api_key(fallback_api_key);
    (PromptOptimizer::new(params), store)
}

fn output(content: &str) -> CompletionOutput {
    CompletionOutput {
        content: content.to_string(),
        usage: None,
    }
}

#[tokio::test]
async fn optimize_returns_content_and_appends_history() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue_complete(output("Write a vivid, sensory poem..."));

    let (optimizer, store) = optimizer_with(model.clone(), None);
    store.set(API_KEY_STORAGE_KEY, "sk-stored");

    let optimized = optimizer
        .optimize("Write a poem about autumn", OptimizationMode::Clarity)
        .await
        .expect("optimize succeeds");

    assert_eq!(optimized, "Write a vivid, sensory poem...");
    assert_eq!(model.tracked_api_keys(), vec!["sk-stored".to_string()]);

    let entries = optimizer.history().list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].input_prompt, "Write a poem about autumn");
    assert_eq!(entries[0].output_prompt, "Write a vivid, sensory poem...");
    assert_eq!(entries[0].model, "mock-model");
    assert_eq!(entries[0].mode, OptimizationMode::Clarity);
}

#[tokio::test]
async fn optimize_sends_mode_clause_and_prompt_for_every_mode() {
    let modes = [
        OptimizationMode::Clarity,
        OptimizationMode::Creativity,
        OptimizationMode::Professional,
        OptimizationMode::Concise,
        OptimizationMode::Academic,
        OptimizationMode::General,
    ];

    for mode in modes {
        let model = Arc::new(MockChatModel::new());
        model.enqueue_complete(output("rewritten"));

        let (optimizer, store) = optimizer_with(model.clone(), None);
        store.set(API_KEY_STORAGE_KEY, "sk-stored");

        optimizer
            .optimize("Summarize this paper", mode)
            .await
            .expect("optimize succeeds");

        let inputs = model.tracked_inputs();
        assert_eq!(inputs.len(), 1);
        let input = &inputs[0];

        assert_eq!(input.messages.len(), 2);

        let system = &input.messages[0];
        assert_eq!(system.role, MessageRole::System);
        assert!(system.content.starts_with(SYSTEM_PREAMBLE));
        assert!(
            system.content.contains(mode.clause()),
            "system message for {mode:?} must contain its clause verbatim"
        );

        let user = &input.messages[1];
        assert_eq!(user.role, MessageRole::User);
        assert!(user.content.contains("Summarize this paper"));
        assert!(user
            .content
            .contains("Please return only the optimized prompt, with no explanation."));

        assert_eq!(input.max_tokens, Some(1024));
        assert_eq!(input.temperature, Some(0.7));
        assert_eq!(input.top_p, Some(0.7));
        assert_eq!(input.top_k, Some(50));
        assert_eq!(input.frequency_penalty, Some(0.5));
        assert_eq!(input.n, Some(1));
        assert_eq!(input.response_format, Some(ResponseFormat::Text));
    }
}

#[tokio::test]
async fn missing_credential_fails_before_any_network_call() {
    let model = Arc::new(MockChatModel::new());
    let (optimizer, _store) = optimizer_with(model.clone(), None);

    let error = optimizer
        .optimize("Write a poem about autumn", OptimizationMode::Clarity)
        .await
        .expect_err("optimize fails");

    assert!(matches!(error, OptimizeError::MissingCredential));
    assert!(model.tracked_inputs().is_empty());
    assert!(optimizer.history().list().is_empty());
}

#[tokio::test]
async fn fallback_api_key_applies_when_store_is_empty() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue_complete(output("rewritten"));

    let (optimizer, _store) =
        optimizer_with(model.clone(), Some("sk-fallback".to_string()));

    optimizer
        .optimize("Write a poem about autumn", OptimizationMode::Concise)
        .await
        .expect("optimize succeeds");

    assert_eq!(model.tracked_api_keys(), vec!["sk-fallback".to_string()]);
}

#[tokio::test]
async fn failed_optimization_creates_no_history_entry() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue_complete(CompletionError::StatusCode(
        reqwest::StatusCode::UNAUTHORIZED,
        r#"{"error":{"message":"invalid key"}}"#.to_string(),
    ));

    let (optimizer, store) = optimizer_with(model.clone(), None);
    store.set(API_KEY_STORAGE_KEY, "sk-stored");

    let error = optimizer
        .optimize("Write a poem about autumn", OptimizationMode::Clarity)
        .await
        .expect_err("optimize fails");

    match error {
        OptimizeError::Completion(CompletionError::StatusCode(status, body)) => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("invalid key"));
        }
        other => panic!("expected status error, got {other:?}"),
    }

    assert!(optimizer.history().list().is_empty());
}

#[tokio::test]
async fn empty_prompt_is_rejected_without_side_effects() {
    let model = Arc::new(MockChatModel::new());
    let (optimizer, store) = optimizer_with(model.clone(), None);
    store.set(API_KEY_STORAGE_KEY, "sk-stored");

    let error = optimizer
        .optimize("   \n\t  ", OptimizationMode::Clarity)
        .await
        .expect_err("optimize fails");

    assert!(matches!(error, OptimizeError::EmptyPrompt));
    assert!(model.tracked_inputs().is_empty());
    assert!(optimizer.history().list().is_empty());
}

#[tokio::test]
async fn history_is_capped_at_twenty_newest_first() {
    let model = Arc::new(MockChatModel::new());
    let (optimizer, store) = optimizer_with(model.clone(), None);
    store.set(API_KEY_STORAGE_KEY, "sk-stored");

    for i in 0..25 {
        model.enqueue_complete(output(&format!("out-{i}")));
        optimizer
            .optimize(&format!("prompt-{i}"), OptimizationMode::Clarity)
            .await
            .expect("optimize succeeds");
    }

    let entries = optimizer.history().list();
    assert_eq!(entries.len(), 20);
    assert_eq!(entries[0].input_prompt, "prompt-24");
    assert_eq!(entries[19].input_prompt, "prompt-5");

    // Same-millisecond entries must still get distinct ids.
    let ids: HashSet<_> = entries.iter().map(|entry| entry.id.clone()).collect();
    assert_eq!(ids.len(), 20);
}

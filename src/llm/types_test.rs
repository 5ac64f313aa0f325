use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
}

#[test]
fn chat_message_deserializes_from_wire_shape() {
    let msg: ChatMessage = serde_json::from_str(r#"{"role":"user","content":"hello"}"#).unwrap();
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "hello");
}

#[test]
fn unknown_role_is_rejected() {
    let result = serde_json::from_str::<ChatMessage>(r#"{"role":"system","content":"hi"}"#);
    assert!(result.is_err());
}

#[test]
fn chat_message_round_trips() {
    let msg = ChatMessage { role: Role::Assistant, content: "bonjour".into() };
    let json = serde_json::to_string(&msg).unwrap();
    let restored: ChatMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.role, Role::Assistant);
    assert_eq!(restored.content, "bonjour");
}

#[test]
fn llm_error_display_includes_status() {
    let err = LlmError::ApiResponse { status: 429, body: "slow down".into() };
    assert!(err.to_string().contains("429"));
}

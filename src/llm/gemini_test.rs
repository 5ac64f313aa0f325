use super::*;

// =========================================================================
// build_request
// =========================================================================

#[test]
fn request_serializes_camel_case_with_system() {
    let messages = [
        ChatMessage { role: Role::User, content: "hi".into() },
        ChatMessage { role: Role::Assistant, content: "hello".into() },
    ];
    let request = build_request(0.7, Some("be helpful"), &messages);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be helpful");
    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][1]["role"], "model");
    assert_eq!(json["contents"][1]["parts"][0]["text"], "hello");
    assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[test]
fn request_omits_system_instruction_when_absent() {
    let messages = [ChatMessage { role: Role::User, content: "hi".into() }];
    let request = build_request(0.8, None, &messages);
    let json = serde_json::to_value(&request).unwrap();

    assert!(json.get("systemInstruction").is_none());
    assert_eq!(json["contents"].as_array().unwrap().len(), 1);
}

#[test]
fn wire_role_maps_assistant_to_model() {
    assert_eq!(wire_role(Role::User), "user");
    assert_eq!(wire_role(Role::Assistant), "model");
}

// =========================================================================
// parse_response
// =========================================================================

#[test]
fn parse_response_happy_path() {
    let json = r#"{
        "candidates": [{
            "content": {"parts": [{"text": "Bienvenue "}, {"text": "a Paris!"}], "role": "model"},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 34},
        "modelVersion": "gemini-1.5-flash-002"
    }"#;

    let reply = parse_response(json, "gemini-1.5-flash-latest").unwrap();
    assert_eq!(reply.text, "Bienvenue a Paris!");
    assert_eq!(reply.model, "gemini-1.5-flash-002");
    assert_eq!(reply.finish_reason, "STOP");
    assert_eq!(reply.prompt_tokens, 12);
    assert_eq!(reply.completion_tokens, 34);
}

#[test]
fn parse_response_falls_back_to_requested_model() {
    let json = r#"{"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}"#;
    let reply = parse_response(json, "gemini-1.5-flash-latest").unwrap();
    assert_eq!(reply.model, "gemini-1.5-flash-latest");
    assert_eq!(reply.finish_reason, "");
    assert_eq!(reply.prompt_tokens, 0);
}

#[test]
fn parse_response_rejects_empty_candidates() {
    let err = parse_response(r#"{"candidates": []}"#, "m").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
    assert!(err.to_string().contains("no candidates"));
}

#[test]
fn parse_response_rejects_malformed_json() {
    let err = parse_response("not json", "m").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_response_tolerates_partless_candidate() {
    let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
    let reply = parse_response(json, "m").unwrap();
    assert_eq!(reply.text, "");
    assert_eq!(reply.finish_reason, "SAFETY");
}

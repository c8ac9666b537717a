use serde_json::Value;

pub fn assert_history_entry(entry: &Value, expected_text: &str) {
    assert!(entry.get("id").and_then(|v| v.as_str()).is_some());
    assert_eq!(
        entry.get("text").and_then(|v| v.as_str()),
        Some(expected_text)
    );
    assert!(entry.get("voiceId").and_then(|v| v.as_str()).is_some());
    assert!(entry.get("rate").and_then(|v| v.as_f64()).is_some());
    assert!(entry.get("pitch").and_then(|v| v.as_f64()).is_some());
    assert!(entry.get("createdAt").is_some());
}

pub fn assert_premium_response(response: &Value) {
    assert_eq!(
        response.get("message").and_then(|v| v.as_str()),
        Some("Premium audio generated! (Simulated)")
    );
    assert_eq!(
        response.get("audioUrl").and_then(|v| v.as_str()),
        Some("https://storage.googleapis.com/audio-samples/fake-audio.mp3")
    );
    assert!(
        response.get("savedId").and_then(|v| v.as_str()).is_some(),
        "Missing savedId field"
    );
}

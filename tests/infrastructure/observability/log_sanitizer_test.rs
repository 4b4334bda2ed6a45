use vocalingo::infrastructure::observability::sanitize_for_log;

#[test]
fn given_blank_text_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_for_log("   \n"), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_keeps_it_trimmed() {
    assert_eq!(sanitize_for_log("  {\"isCorrect\": true}  "), "{\"isCorrect\": true}");
}

#[test]
fn given_long_multibyte_text_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "ʃ".repeat(250);

    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"ʃ".repeat(200)));
    assert!(sanitized.ends_with("... (250 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_redacts_every_occurrence() {
    let text = "Authorization: Bearer sk-abc123 then x-goog-api-key: AIzaSecret and ?key=AIzaOther&alt=json";

    let sanitized = sanitize_for_log(text);

    assert!(!sanitized.contains("sk-abc123"));
    assert!(!sanitized.contains("AIzaSecret"));
    assert!(!sanitized.contains("AIzaOther"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(sanitized.contains("&alt=json"));
}

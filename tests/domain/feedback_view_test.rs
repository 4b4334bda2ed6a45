use serde_json::json;

use vocalingo::domain::{FeedbackSection, FeedbackView, TRANSPORT_FAILURE_MESSAGE};

#[test]
fn given_full_record_when_reading_view_then_all_sections_render_in_order() {
    let value = json!({
        "isCorrect": true,
        "targetPhonetic": "/ˈwɔːtər/",
        "spokenPhonetic": "/ˈwɑːtər/",
        "feedback": "Close, the first vowel was too open.",
        "commonMistakes": "Using an American open a.",
        "culturalContext": "British speakers often drop the final r.",
        "tips": ["Round your lips", "Listen to native audio"],
        "encouragement": "Nearly there!"
    });

    let view = FeedbackView::from_value(&value);

    assert!(view.is_correct);
    assert_eq!(
        view.sections(),
        vec![
            FeedbackSection::Summary("Close, the first vowel was too open.".to_string()),
            FeedbackSection::TargetPronunciation("/ˈwɔːtər/".to_string()),
            FeedbackSection::YourPronunciation("/ˈwɑːtər/".to_string()),
            FeedbackSection::CommonMistakes("Using an American open a.".to_string()),
            FeedbackSection::CulturalContext(
                "British speakers often drop the final r.".to_string()
            ),
            FeedbackSection::Tips(vec![
                "Round your lips".to_string(),
                "Listen to native audio".to_string()
            ]),
            FeedbackSection::Encouragement("Nearly there!".to_string()),
        ]
    );
}

#[test]
fn given_null_and_missing_fields_when_reading_view_then_they_are_not_displayed() {
    let value = json!({
        "isCorrect": false,
        "feedback": "Try again.",
        "culturalContext": null,
        "tips": []
    });

    let view = FeedbackView::from_value(&value);

    assert!(!view.is_correct);
    assert_eq!(
        view.sections(),
        vec![FeedbackSection::Summary("Try again.".to_string())]
    );
}

#[test]
fn given_wrongly_typed_fields_when_reading_view_then_treats_them_as_absent() {
    let value = json!({
        "isCorrect": "yes",
        "feedback": 12,
        "tips": "not a list",
        "encouragement": ""
    });

    let view = FeedbackView::from_value(&value);

    assert_eq!(view, FeedbackView::default());
    assert!(view.sections().is_empty());
}

#[test]
fn given_transport_failure_when_building_view_then_is_negative_with_retry_message() {
    let view = FeedbackView::transport_failure();

    assert!(!view.is_correct);
    assert_eq!(view.feedback.as_deref(), Some(TRANSPORT_FAILURE_MESSAGE));
    assert_eq!(view.sections().len(), 1);
}

#[test]
fn given_sections_when_formatted_then_use_display_labels() {
    let tips = FeedbackSection::Tips(vec!["One".to_string(), "Two".to_string()]);
    let target = FeedbackSection::TargetPronunciation("/ɡato/".to_string());

    assert_eq!(tips.to_string(), "Tips for improvement:\n- One\n- Two");
    assert_eq!(target.to_string(), "Target Pronunciation: /ɡato/");
}

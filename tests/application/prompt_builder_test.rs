use vocalingo::application::services::build_evaluation_prompt;

#[test]
fn given_same_inputs_when_building_twice_then_prompts_are_identical() {
    let first = build_evaluation_prompt("bonjour", "bonjur", "French");
    let second = build_evaluation_prompt("bonjour", "bonjur", "French");

    assert_eq!(first, second);
}

#[test]
fn given_inputs_when_building_then_each_appears_exactly_once() {
    let prompt = build_evaluation_prompt("bonjour", "bonjur", "French");

    assert_eq!(prompt.matches("\"bonjour\"").count(), 1);
    assert_eq!(prompt.matches("\"bonjur\"").count(), 1);
    assert_eq!(prompt.matches("French").count(), 1);
}

#[test]
fn given_inputs_when_building_then_they_fill_the_designated_slots() {
    let prompt = build_evaluation_prompt("bonjour", "bonjur", "French");

    assert!(prompt.starts_with(
        "As a multilingual pronunciation expert, evaluate the pronunciation of \"bonjur\" compared to the target word \"bonjour\" in French."
    ));
}

#[test]
fn given_different_inputs_when_building_then_prompts_differ() {
    let a = build_evaluation_prompt("gracias", "grasias", "Spanish");
    let b = build_evaluation_prompt("gracias", "gracias", "Spanish");

    assert_ne!(a, b);
}

#[test]
fn given_prompt_when_built_then_requests_every_feedback_field() {
    let prompt = build_evaluation_prompt("danke", "danke", "German");

    for field in [
        "\"isCorrect\"",
        "\"targetPhonetic\"",
        "\"spokenPhonetic\"",
        "\"feedback\"",
        "\"commonMistakes\"",
        "\"culturalContext\"",
        "\"tips\"",
        "\"encouragement\"",
    ] {
        assert!(prompt.contains(field), "missing {field}");
    }
    assert!(prompt.contains("IPA (International Phonetic Alphabet)"));
    assert!(prompt.contains("Offer 3-5 practical exercises"));
}

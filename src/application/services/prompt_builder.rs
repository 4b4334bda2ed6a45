//! Evaluation prompt for the pronunciation judge.
//!
//! The prompt asks for seven things in a fixed order (correctness, IPA
//! transcriptions, detailed feedback, common mistakes, cultural context,
//! improvement tips, encouragement) and ends with the JSON shape the reply
//! must take. Each input appears exactly once, in the opening sentence.

const ANALYSIS_SECTIONS: &str = "\
Provide a comprehensive analysis including:

1. Correctness: Determine if the pronunciation is correct or not.
2. Phonetic Transcription: Provide the IPA (International Phonetic Alphabet) transcription for both the target word and the spoken attempt.
3. Detailed Feedback:
   - Identify specific sounds or syllables that were pronounced correctly or incorrectly.
   - Explain any differences between the target and spoken pronunciations.
   - Describe the correct mouth positioning, tongue placement, and airflow for challenging sounds.
4. Common Mistakes: Mention typical errors made by learners of this language when pronouncing this word or similar sounds.
5. Cultural Context: If relevant, provide any cultural nuances or contexts related to the pronunciation or usage of the word.
6. Improvement Tips: Offer 3-5 practical exercises or techniques to help the learner improve their pronunciation.
7. Encouragement: Include a motivational message to encourage the learner's progress.
";

const OUTPUT_FORMAT: &str = r#"
Format your response as JSON with the following structure:
{
  "isCorrect": boolean,
  "targetPhonetic": "IPA transcription of target word",
  "spokenPhonetic": "IPA transcription of spoken attempt",
  "feedback": "Detailed feedback string",
  "commonMistakes": "Description of common mistakes",
  "culturalContext": "Cultural information if applicable, or null if not",
  "tips": ["array", "of", "improvement", "tips"],
  "encouragement": "Motivational message"
}

Ensure all text is appropriate for language learners and avoid using technical linguistic terminology without explanation."#;

/// Renders the evaluation prompt. Pure: equal inputs give equal output.
pub fn build_evaluation_prompt(target_word: &str, spoken_word: &str, language: &str) -> String {
    let mut prompt = String::with_capacity(2048);
    prompt.push_str(&format!(
        "As a multilingual pronunciation expert, evaluate the pronunciation of \"{}\" compared to the target word \"{}\" in {}.\n\n",
        spoken_word, target_word, language
    ));
    prompt.push_str(ANALYSIS_SECTIONS);
    prompt.push_str(OUTPUT_FORMAT);
    prompt
}

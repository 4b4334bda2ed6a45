mod http_pronunciation_checker;

pub use http_pronunciation_checker::{CHECK_PRONUNCIATION_PATH, HttpPronunciationChecker};

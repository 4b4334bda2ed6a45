mod check_pronunciation;
mod health;
mod not_found;

pub use check_pronunciation::{
    CheckPronunciationPayload, ErrorResponse, PARSE_FAILURE_MESSAGE, PROCESSING_FAILURE_MESSAGE,
    check_pronunciation_handler,
};
pub use health::health_handler;
pub use not_found::not_found_handler;

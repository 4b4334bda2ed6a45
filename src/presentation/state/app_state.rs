use std::sync::Arc;

use crate::application::services::PronunciationService;

#[derive(Clone)]
pub struct AppState {
    pub pronunciation_service: Arc<PronunciationService>,
}

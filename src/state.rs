//! Shared application state for all routes.

use crate::service::StudentRepository;
use crate::translate::Translator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn StudentRepository>,
    pub translator: Arc<Translator>,
}

impl AppState {
    pub fn new(repository: Arc<dyn StudentRepository>, translator: Translator) -> Self {
        AppState {
            repository,
            translator: Arc::new(translator),
        }
    }
}

use std::sync::Arc;

use crate::services::formspree::FormspreeClient;

#[derive(Clone)]
pub struct AppState {
    pub formspree: Arc<FormspreeClient>,
}

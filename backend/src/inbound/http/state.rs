//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so every worker
//! thread shares the same facade and therefore the same repositories.

use std::sync::Arc;

use crate::domain::HbnbFacade;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub facade: Arc<HbnbFacade>,
}

impl HttpState {
    pub fn new(facade: Arc<HbnbFacade>) -> Self {
        Self { facade }
    }
}

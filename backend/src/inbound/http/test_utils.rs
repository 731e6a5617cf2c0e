//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use super::{HttpState, api_scope};
use crate::Trace;
use crate::domain::HbnbFacade;

/// Build the versioned API over `facade`, wrapped in the trace middleware.
///
/// The facade is cloned into the app, so callers can keep using their copy
/// to seed or inspect the same repositories.
pub fn test_app(
    facade: &HbnbFacade,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(Arc::new(facade.clone()))))
        .wrap(Trace)
        .service(api_scope())
}

/// Read a string field from a JSON body.
pub fn str_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

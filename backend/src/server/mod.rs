//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use hbnb_backend::Trace;
#[cfg(debug_assertions)]
use hbnb_backend::doc::ApiDoc;
use hbnb_backend::domain::HbnbFacade;
use hbnb_backend::inbound::http::api_scope;
use hbnb_backend::inbound::http::health::{HealthState, live, ready};
use hbnb_backend::inbound::http::state::HttpState;
use hbnb_backend::outbound::memory::in_memory_repositories;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over fresh in-memory repositories.
///
/// Every worker shares one facade, so data written through one worker is
/// visible to all of them.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let facade = HbnbFacade::new(in_memory_repositories(), Arc::new(DefaultClock));
    let http_state = web::Data::new(HttpState::new(Arc::new(facade)));
    let server_health_state = health_state.clone();
    let ServerConfig { bind_addr } = config;

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(&bind_addr)?;
    info!(host = %bind_addr.0, port = bind_addr.1, "listening");
    let server = server.run();

    health_state.mark_ready();
    Ok(server)
}

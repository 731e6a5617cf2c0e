//! Tests for the backend application bootstrap, covering readiness
//! signalling.

use super::server::{ServerConfig, create_server};
use actix_web::web;
use hbnb_backend::inbound::http::health::HealthState;
use rstest::{fixture, rstest};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> (String, u16) {
    ("127.0.0.1".into(), 0)
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    bind_address: (String, u16),
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(bind_address);
    assert_eq!(config.bind_addr(), ("127.0.0.1", 0));
    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

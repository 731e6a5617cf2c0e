//! Server settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listener settings, layered from CLI flags, `HBNB_*` variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HBNB")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self { bind_addr }
    }

    /// Return the host and port the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.bind_addr.0, self.bind_addr.1)
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self::new((settings.host.clone(), settings.port))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("hbnb-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("HBNB_HOST", None::<String>),
            ("HBNB_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(ServerConfig::from(&settings).bind_addr(), ("0.0.0.0", 8080));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HBNB_HOST", Some("127.0.0.1".to_owned())),
            ("HBNB_PORT", Some("5000".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 5000);
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([("HBNB_PORT", Some("5000".to_owned()))]);

        let settings = ServerSettings::load_from_iter(
            ["hbnb-backend", "--port", "6000"].map(OsString::from),
        )
        .expect("config should load");
        assert_eq!(settings.port, 6000);
    }
}

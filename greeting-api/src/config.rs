//! Service configuration.
//!
//! For now this only configures the HTTP listen address; the service has no
//! other tunables.

use std::net::SocketAddr;

/// Configuration for the greeting HTTP server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        // Safe to unwrap: fixed, valid address literal.
        // Bind to all interfaces so the container port mapping (8080→8080) is
        // reachable from the host when running under docker-compose.
        let addr: SocketAddr = "0.0.0.0:8080"
            .parse()
            .expect("hard-coded listen address should parse");
        Self { listen_addr: addr }
    }
}

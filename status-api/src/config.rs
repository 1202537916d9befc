//! Status API configuration.
//!
//! Only the HTTP listen address is configurable, and the binary always
//! uses the default.

use std::net::SocketAddr;

/// Configuration for the status API HTTP server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        // Bind to all interfaces so a container port mapping (5000→5000)
        // is reachable from the host.
        let addr: SocketAddr = "0.0.0.0:5000"
            .parse()
            .expect("hard-coded API listen address should parse");
        Self { listen_addr: addr }
    }
}

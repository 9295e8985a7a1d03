// src/cluster/readiness.rs

//! TCP readiness probing.
//!
//! A daemon is considered ready once its HTTP port accepts a connection.
//! This is a proxy only; we know nothing about the daemon's wire protocol.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::{sleep, Instant};

use crate::config::Settings;
use crate::errors::Result;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll `127.0.0.1:<port>` until it accepts a connection or `timeout`
/// elapses. Returns whether the port opened in time.
pub async fn wait_for_port(port: u16, timeout: Duration) -> bool {
    let start = Instant::now();
    loop {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return true;
        }
        if start.elapsed() >= timeout {
            return false;
        }
        sleep(POLL_INTERVAL).await;
    }
}

/// Port to probe for a daemon: the `:port` suffix of its bind-address
/// configuration value when present and parseable, else the daemon default.
pub fn probe_port(settings: &Settings, bind_address_key: &str, default_port: u16) -> Result<u16> {
    match settings.conf(bind_address_key)? {
        Some(address) => Ok(parse_port_suffix(&address).unwrap_or(default_port)),
        None => Ok(default_port),
    }
}

fn parse_port_suffix(address: &str) -> Option<u16> {
    address
        .rsplit_once(':')
        .and_then(|(_, port)| port.parse().ok())
}

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

// Runtime/server settings, read from the environment (or a local `.env`).

pub const SERVICE_NAME: &str = "feedback-server";

pub fn http_host() -> IpAddr {
    parse_or(
        env::var("FEEDBACK_SERVER_HOST").ok(),
        IpAddr::V4(Ipv4Addr::LOCALHOST),
    )
}

pub fn http_port() -> u16 {
    parse_or(env::var("FEEDBACK_SERVER_PORT").ok(), 8080)
}

// Unset or unparsable values fall back to the default.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

//! Listen-port resolution for numclass
//!
//! Resolution priority: `PORT` environment variable → default 8000.
//! An unparseable value is logged and falls back to the default rather
//! than aborting startup.

use tracing::warn;

/// Default listen port when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 8000;

/// Resolve the listen port from the `PORT` environment variable
pub fn resolve_port() -> u16 {
    resolve_port_from(std::env::var("PORT").ok())
}

fn resolve_port_from(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => match value.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "PORT value {:?} is not a valid port, using default {}",
                    value, DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_uses_default() {
        assert_eq!(resolve_port_from(None), 8000);
    }

    #[test]
    fn valid_value_wins() {
        assert_eq!(resolve_port_from(Some("9090".to_string())), 9090);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        assert_eq!(resolve_port_from(Some("not-a-port".to_string())), 8000);
        assert_eq!(resolve_port_from(Some("70000".to_string())), 8000);
        assert_eq!(resolve_port_from(Some("".to_string())), 8000);
    }
}

use once_cell::sync::Lazy;
use std::env::var;
use tracing::warn;

/// Payload size limit when `WEBLOG_RPC_MAX_PAYLOAD` is not set, in KiB.
/// Media uploads travel base64 encoded inside the request, hence the margin.
const DEFAULT_MAX_PAYLOAD_KB: usize = 8192;

pub struct Config {
    /// Requests above this many bytes are refused before being parsed.
    pub max_payload_size: usize,
}

impl Config {
    /// Reads the configuration from the environment. Call `dotenv` first if
    /// a `.env` file should be taken into account.
    pub fn from_env() -> Config {
        let max_payload_kb = match var("WEBLOG_RPC_MAX_PAYLOAD") {
            Ok(value) => value.trim().parse::<usize>().unwrap_or_else(|_| {
                warn!(
                    "Invalid configuration: WEBLOG_RPC_MAX_PAYLOAD={:?} is not a size in KiB, using {}",
                    value, DEFAULT_MAX_PAYLOAD_KB
                );
                DEFAULT_MAX_PAYLOAD_KB
            }),
            Err(_) => DEFAULT_MAX_PAYLOAD_KB,
        };

        Config {
            max_payload_size: max_payload_kb.saturating_mul(1024),
        }
    }

    pub fn with_max_payload_size(mut self, bytes: usize) -> Config {
        self.max_payload_size = bytes;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_payload_size: DEFAULT_MAX_PAYLOAD_KB * 1024,
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_from_env() {
        env::set_var("WEBLOG_RPC_MAX_PAYLOAD", "64");
        assert_eq!(Config::from_env().max_payload_size, 64 * 1024);

        env::set_var("WEBLOG_RPC_MAX_PAYLOAD", "a lot");
        assert_eq!(
            Config::from_env().max_payload_size,
            Config::default().max_payload_size
        );

        env::remove_var("WEBLOG_RPC_MAX_PAYLOAD");
        assert_eq!(Config::from_env().max_payload_size, DEFAULT_MAX_PAYLOAD_KB * 1024);
    }
}

use anyhow::anyhow;
use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// When set, reset events are appended to this file as JSON lines
    /// instead of being emitted through tracing.
    pub reset_event_log_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr_raw = lookup("BIND_ADDR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let reset_event_log_path = lookup("RESET_EVENT_LOG_PATH")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            bind_addr,
            reset_event_log_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert!(config.reset_event_log_path.is_none());
    }

    #[test]
    fn reads_bind_addr_and_log_path() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("RESET_EVENT_LOG_PATH", " /var/log/passreset/events.jsonl "),
        ]))
        .expect("config");
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.reset_event_log_path,
            Some(PathBuf::from("/var/log/passreset/events.jsonl"))
        );
    }

    #[test]
    fn blank_log_path_is_ignored() {
        let config =
            Config::from_lookup(lookup_from(&[("RESET_EVENT_LOG_PATH", "   ")])).expect("config");
        assert!(config.reset_event_log_path.is_none());
    }

    #[test]
    fn rejects_unparsable_bind_addr() {
        let err = Config::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")]))
            .expect_err("should fail");
        assert!(err.to_string().contains("Invalid BIND_ADDR value"));
    }
}

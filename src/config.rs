//! Process Configuration
//!
//! Everything is read from environment variables once at startup:
//!
//! | Variable            | Default             |
//! |---------------------|---------------------|
//! | `PORT`              | `3001`              |
//! | `CORPUS_PATH`       | `completeworks.txt` |
//! | `STATIC_DIR`        | `./static`          |
//! | `CONTENTS_BOUNDARY` | `fixed`             |
//! | `CONTENTS_WINDOW`   | `1970`              |

use crate::sections::builder::{ContentsBoundary, DEFAULT_CONTENTS_WINDOW, DEFAULT_STRUCTURAL_SCAN};
use anyhow::{anyhow, Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORPUS_PATH: &str = "completeworks.txt";
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub corpus_path: PathBuf,
    pub static_dir: PathBuf,
    pub contents_boundary: ContentsBoundary,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            contents_boundary: ContentsBoundary::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset and empty values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", port))?;
        }
        if let Some(path) = get("CORPUS_PATH") {
            config.corpus_path = PathBuf::from(path);
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        let window = match get("CONTENTS_WINDOW") {
            Some(window) => window
                .trim()
                .parse()
                .with_context(|| format!("CONTENTS_WINDOW must be a byte count, got {:?}", window))?,
            None => DEFAULT_CONTENTS_WINDOW,
        };

        config.contents_boundary = match get("CONTENTS_BOUNDARY").as_deref().map(str::trim) {
            None | Some("fixed") => ContentsBoundary::FixedWindow(window),
            Some("structural") => ContentsBoundary::Structural {
                max_scan: DEFAULT_STRUCTURAL_SCAN,
                fallback_window: window,
            },
            Some(other) => {
                return Err(anyhow!(
                    "CONTENTS_BOUNDARY must be \"fixed\" or \"structural\", got {:?}",
                    other
                ))
            }
        };

        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3001);
        assert_eq!(config.corpus_path, PathBuf::from("completeworks.txt"));
        assert_eq!(config.contents_boundary, ContentsBoundary::FixedWindow(1970));
    }

    #[test]
    fn test_port_override() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.listen_addr().port(), 8080);
    }

    #[test]
    fn test_empty_port_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_structural_boundary() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTENTS_BOUNDARY", "structural"),
            ("CONTENTS_WINDOW", "2048"),
        ]))
        .unwrap();

        assert_eq!(
            config.contents_boundary,
            ContentsBoundary::Structural {
                max_scan: DEFAULT_STRUCTURAL_SCAN,
                fallback_window: 2048,
            }
        );
    }

    #[test]
    fn test_unknown_boundary() {
        let result = Config::from_lookup(lookup_from(&[("CONTENTS_BOUNDARY", "guess")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_paths() {
        let config = Config::from_lookup(lookup_from(&[
            ("CORPUS_PATH", "/data/works.txt"),
            ("STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();

        assert_eq!(config.corpus_path, PathBuf::from("/data/works.txt"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }
}

/*
 * config.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Hypertext, an HTTP client library.
 *
 * Hypertext is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Hypertext is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Hypertext.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Client defaults and decoding limits.
//!
//! Every field has a default, so a JSON document only needs the fields it
//! changes:
//!
//! ```
//! use hypertext_core::config::ClientConfig;
//!
//! let config = ClientConfig::from_json(r#"{ "timeout_ms": 2500 }"#).unwrap();
//! assert_eq!(config.timeout_ms, Some(2500));
//! assert!(config.verify);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::http::{Method, Request};

pub const DEFAULT_USER_AGENT: &str = concat!("hypertext/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_MAX_CHUNK_SIZE: u64 = 16 * 1024 * 1024;
pub const DEFAULT_MAX_HEAD_SIZE: usize = 64 * 1024;
pub const DEFAULT_READ_SIZE: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Sent as `User-Agent` unless a header parameter overrides it.
    pub user_agent: Option<String>,
    /// Default request timeout; the transport enforces it.
    pub timeout_ms: Option<u64>,
    /// Verify server certificates on secure targets.
    pub verify: bool,
    /// Largest single chunk the streaming cursor will buffer.
    pub max_chunk_size: u64,
    /// Largest response head (status line plus headers).
    pub max_head_size: usize,
    /// Buffer space reserved before each transport read.
    pub read_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout_ms: None,
            verify: true,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            max_head_size: DEFAULT_MAX_HEAD_SIZE,
            read_size: DEFAULT_READ_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, HttpError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A request carrying the configured defaults, to apply parameters to.
    pub fn base_request(&self, method: Method, target: impl Into<String>) -> Request {
        let mut request = Request::new(method, target);
        if let Some(ua) = &self.user_agent {
            request.header("User-Agent", ua.as_str());
        }
        request.timeout = self.timeout_ms.map(Duration::from_millis);
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{assemble, params};

    #[test]
    fn defaults() {
        let c = ClientConfig::default();
        assert_eq!(c.user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
        assert_eq!(c.max_chunk_size, 16 * 1024 * 1024);
        assert_eq!(c.read_size, 8192);
        assert!(c.verify);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = ClientConfig::from_json(r#"{"verify": false, "user_agent": null}"#).unwrap();
        assert!(!c.verify);
        assert!(c.user_agent.is_none());
        assert_eq!(c.max_head_size, DEFAULT_MAX_HEAD_SIZE);
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(
            ClientConfig::from_json(r#"{"read_size": "big"}"#),
            Err(HttpError::Config(_))
        ));
    }

    #[test]
    fn parameters_override_base_request() {
        let c = ClientConfig {
            timeout_ms: Some(1000),
            ..Default::default()
        };
        let base = c.base_request(Method::Get, "/");
        assert_eq!(base.timeout, Some(Duration::from_secs(1)));
        let req = assemble(
            base,
            (params::timeout_ms(50), params::headers([("user-agent", "custom/1")])),
        );
        assert_eq!(req.timeout, Some(Duration::from_millis(50)));
        assert_eq!(req.headers.get("User-Agent"), Some("custom/1"));
    }
}

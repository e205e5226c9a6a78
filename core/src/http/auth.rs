/*
 * auth.rs
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

//! Built-in authorization schemes: Basic (RFC 7617) and Bearer (RFC 6750).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::http::capability::Authorization;
use crate::http::request::Request;

/// HTTP Basic credentials. Encodes to `Basic base64(user ":" password)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authorization for BasicAuth {
    fn encode(&self, _request: &mut Request) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(raw.as_bytes()))
    }
}

/// OAuth 2.0 bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerAuth(pub String);

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl Authorization for BearerAuth {
    fn encode(&self, _request: &mut Request) -> String {
        format!("Bearer {}", self.0)
    }
}

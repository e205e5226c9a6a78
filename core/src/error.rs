/*
 * error.rs
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

//! Runtime error types.
//!
//! Contract violations (a parameter, header map, credential or transport that
//! lacks the required operations) never show up here: they are rejected by
//! trait bounds at compile time.

use std::io;

use thiserror::Error;

/// Failure reported by a [`TransportAdapter`](crate::http::TransportAdapter).
///
/// Cloneable so a chunk cursor can keep it as its last error and still hand
/// out references to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("I/O error ({kind:?}): {message}")]
    Io { kind: io::ErrorKind, message: String },

    #[error("transport closed")]
    Closed,

    #[error("TLS error: {0}")]
    Tls(String),
}

impl TransportError {
    /// The I/O error kind, when the failure came from the OS.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            TransportError::Io { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<io::Error> for TransportError {
    fn from(e: io::Error) -> Self {
        TransportError::Io {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// Error stored on a [`ChunkCursor`](crate::http::ChunkCursor) when a chunked
/// body cannot be decoded any further. Absence of an error after the stream
/// ends means the terminal chunk was reached cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid chunk size: {0:?}")]
    InvalidChunkSize(String),

    #[error("chunk data not followed by CRLF")]
    MissingCrlf,

    #[error("invalid trailer field: {0:?}")]
    InvalidTrailer(String),

    #[error("chunk framing line exceeds {0} bytes")]
    LineTooLong(usize),

    #[error("chunk framing is not valid UTF-8")]
    InvalidUtf8,

    #[error("chunk of {size} bytes exceeds limit of {limit} bytes")]
    ChunkTooLarge { size: u64, limit: u64 },

    #[error("connection closed before the terminal chunk")]
    UnexpectedEof,
}

/// Error from a request/response round trip ([`exchange`](crate::http::exchange)).
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid status line: {0:?}")]
    InvalidStatusLine(String),

    #[error("invalid header line: {0:?}")]
    InvalidHeader(String),

    #[error("response head exceeds {0} bytes")]
    HeadTooLarge(usize),

    #[error("connection closed before the response head was complete")]
    UnexpectedEof,

    #[error("streaming requested but response is not chunked")]
    NotChunked,

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

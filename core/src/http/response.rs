/*
 * response.rs
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


//! Response status, headers and the optional chunk cursor.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::http::cursor::{ChunkCursor, ChunkIter};
use crate::http::h1::head::ResponseHead;
use crate::http::headers::HeaderMap;
use crate::http::request::Request;
use crate::http::transport::TransportAdapter;

/// A received response. The body is only exposed in streaming mode, through
/// the chunk cursor; `has_chunked_response` tells the two modes apart.
pub struct Response {
    pub code: u16,
    pub reason: Option<String>,
    pub headers: HeaderMap,
    elapsed: Duration,
    chunks: Option<ChunkCursor>,
}

impl Response {
    /// An empty response shaped by `request`: it carries a cursor iff the
    /// request asked for streaming.
    pub fn for_request(request: &Request) -> Self {
        Self {
            code: 0,
            reason: None,
            headers: HeaderMap::new(),
            elapsed: Duration::ZERO,
            chunks: request.stream.then(ChunkCursor::new),
        }
    }

    pub fn from_head(head: ResponseHead, elapsed: Duration, chunks: Option<ChunkCursor>) -> Self {
        Self {
            code: head.code,
            reason: head.reason,
            headers: head.headers,
            elapsed,
            chunks,
        }
    }

    /// Like `for_request`, with the cursor limits taken from `config`.
    pub fn for_request_with(request: &Request, config: &ClientConfig) -> Self {
        Self {
            chunks: request.stream.then(|| ChunkCursor::with_config(config)),
            ..Self::for_request(request)
        }
    }

    /// Time from sending the request until the response head was parsed.
    pub fn elapsed_time(&self) -> Duration {
        self.elapsed
    }

    pub fn set_elapsed_time(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn has_chunked_response(&self) -> bool {
        self.chunks.is_some()
    }

    pub fn chunk_cursor(&self) -> Option<&ChunkCursor> {
        self.chunks.as_ref()
    }

    pub fn chunk_cursor_mut(&mut self) -> Option<&mut ChunkCursor> {
        self.chunks.as_mut()
    }

    /// Walk the body chunks, reading from `transport`. Without a cursor the
    /// iterator is already at its end.
    pub fn chunk_iter<'a, T: TransportAdapter + ?Sized>(
        &'a mut self,
        transport: &'a mut T,
    ) -> ChunkIter<'a, T> {
        match self.chunks.as_mut() {
            Some(cursor) => ChunkIter::new(cursor, transport),
            None => ChunkIter::end(),
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("code", &self.code)
            .field("reason", &self.reason)
            .field("headers", &self.headers)
            .field("elapsed", &self.elapsed)
            .field("chunked", &self.has_chunked_response())
            .finish()
    }
}

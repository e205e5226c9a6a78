/*
 * exchange.rs
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


//! One request/response round trip over a borrowed transport.

use std::time::Instant;

use bytes::BytesMut;
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::HttpError;
use crate::http::cursor::ChunkCursor;
use crate::http::h1::head::HeadParser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::transport::{Target, TransportAdapter};

/// Send `request` to `target` and read the response head.
///
/// When `request.stream` is set the response must use chunked transfer
/// coding; its cursor starts with whatever body bytes arrived with the head
/// and reads the rest from `transport` on demand. Otherwise no body is read.
/// The elapsed time covers sending through parsing the head. Certificates are
/// verified only when both `target.verify` and `config.verify` are set.
pub fn exchange<T: TransportAdapter + ?Sized>(
    transport: &mut T,
    target: &Target,
    request: &Request,
    config: &ClientConfig,
) -> Result<Response, HttpError> {
    let start = Instant::now();
    let verify = target.verify && config.verify;
    let written = target.send_with_verify(transport, request, verify).map_err(|e| {
        warn!(host = %target.host, port = target.port, error = %e, "send failed");
        e
    })?;
    debug!(
        method = %request.method,
        target = %request.target,
        host = %target.host,
        port = target.port,
        secure = target.secure,
        bytes = written,
        "request sent"
    );

    let mut parser = HeadParser::new(config.max_head_size);
    let mut buf = BytesMut::with_capacity(config.read_size);
    let head = loop {
        if let Some(head) = parser.receive(&mut buf)? {
            break head;
        }
        buf.reserve(config.read_size.max(1));
        match transport.receive(&mut buf) {
            Ok(0) => return Err(HttpError::UnexpectedEof),
            Ok(n) => trace!(bytes = n, "read response head bytes"),
            Err(e) => {
                warn!(host = %target.host, error = %e, "transport read failed");
                return Err(e.into());
            }
        }
    };
    let elapsed = start.elapsed();
    debug!(
        code = head.code,
        chunked = head.is_chunked(),
        elapsed_us = elapsed.as_micros() as u64,
        "response head"
    );

    let chunks = if request.stream {
        if !head.is_chunked() {
            return Err(HttpError::NotChunked);
        }
        Some(ChunkCursor::with_config(config).with_buffered(buf))
    } else {
        None
    };
    Ok(Response::from_head(head, elapsed, chunks))
}

/*
 * wire.rs
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

//! HTTP/1.1 request serialization, for transports that write raw bytes.

use bytes::{BufMut, BytesMut};

use crate::error::HttpError;
use crate::http::request::Request;

fn check_field(name: &str, value: &str) -> Result<(), HttpError> {
    let bad_name = name.is_empty()
        || name
            .bytes()
            .any(|b| b <= b' ' || b == b':' || b >= 0x7f);
    let bad_value = value.bytes().any(|b| b == b'\r' || b == b'\n' || b == 0);
    if bad_name || bad_value {
        return Err(HttpError::InvalidHeader(format!("{}: {}", name, value)));
    }
    Ok(())
}

fn put_field(out: &mut BytesMut, name: &str, value: &str) {
    out.put_slice(name.as_bytes());
    out.put_slice(b": ");
    out.put_slice(value.as_bytes());
    out.put_slice(b"\r\n");
}

/// Serialize `request` as an HTTP/1.1 message for `host:port`.
///
/// Adds `Host` (with the port when it is not the scheme default),
/// `Authorization` from the assembled credential, `Content-Length` for a body
/// and `Connection: keep-alive`, each only when the request headers do not
/// already carry it. Header names or values that would break framing are
/// rejected.
pub fn encode_request(
    request: &Request,
    host: &str,
    port: u16,
    secure: bool,
) -> Result<BytesMut, HttpError> {
    if request.target.is_empty() || request.target.bytes().any(|b| b <= b' ' || b == 0x7f) {
        return Err(HttpError::InvalidHeader(format!(
            "request-target {:?}",
            request.target
        )));
    }
    let host_header = if (secure && port != 443) || (!secure && port != 80) {
        format!("{}:{}", host, port)
    } else {
        host.to_string()
    };
    let headers = &request.headers;

    let mut out = BytesMut::with_capacity(256);
    out.put_slice(request.method.as_str().as_bytes());
    out.put_u8(b' ');
    out.put_slice(request.target.as_bytes());
    out.put_slice(b" HTTP/1.1\r\n");
    if !headers.contains("Host") {
        check_field("Host", &host_header)?;
        put_field(&mut out, "Host", &host_header);
    }
    for (name, value) in headers.iter() {
        check_field(name, value)?;
        put_field(&mut out, name, value);
    }
    if let Some(auth) = &request.authorization {
        if !headers.contains("Authorization") {
            check_field("Authorization", auth)?;
            put_field(&mut out, "Authorization", auth);
        }
    }
    if let Some(body) = &request.body {
        if !headers.contains("Content-Length") && !headers.contains("Transfer-Encoding") {
            put_field(&mut out, "Content-Length", &body.len().to_string());
        }
    }
    if !headers.contains("Connection") {
        put_field(&mut out, "Connection", "keep-alive");
    }
    out.put_slice(b"\r\n");
    if let Some(body) = &request.body {
        out.put_slice(body);
    }
    Ok(out)
}

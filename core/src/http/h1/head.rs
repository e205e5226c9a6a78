/*
 * head.rs
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

//! HTTP/1.1 response head parser: status line and header fields.
//!
//! Interim 1xx responses (other than 101) are consumed and skipped.

use bytes::BytesMut;

use crate::error::HttpError;
use crate::http::headers::HeaderMap;

/// Status line and header fields of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub code: u16,
    pub reason: Option<String>,
    pub headers: HeaderMap,
}

impl ResponseHead {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// True when `chunked` is the final transfer coding.
    pub fn is_chunked(&self) -> bool {
        self.headers
            .get("Transfer-Encoding")
            .and_then(|v| v.rsplit(',').next())
            .map(|coding| coding.trim().eq_ignore_ascii_case("chunked"))
            .unwrap_or(false)
    }

    pub fn content_length(&self) -> Option<u64> {
        self.headers
            .get("Content-Length")
            .and_then(|v| v.trim().parse::<u64>().ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadState {
    StatusLine,
    Headers,
}

/// Push parser for a response head. Feed bytes via `receive` until it yields
/// the head; bytes after the head stay in the buffer.
pub struct HeadParser {
    state: HeadState,
    code: u16,
    reason: Option<String>,
    headers: HeaderMap,
    consumed: usize,
    max_size: usize,
}

impl HeadParser {
    pub fn new(max_size: usize) -> Self {
        Self {
            state: HeadState::StatusLine,
            code: 0,
            reason: None,
            headers: HeaderMap::new(),
            consumed: 0,
            max_size,
        }
    }

    fn find_crlf(buf: &[u8]) -> Option<usize> {
        buf.windows(2).position(|w| w == b"\r\n")
    }

    fn parse_status_line(line: &str) -> Result<(u16, Option<String>), HttpError> {
        let invalid = || HttpError::InvalidStatusLine(line.to_string());
        // HTTP/1.1 200 OK or HTTP/1.1 200
        let mut parts = line.splitn(3, ' ');
        let version = parts.next().unwrap_or("");
        let code = parts.next().unwrap_or("");
        if !version.starts_with("HTTP/1.")
            || code.len() != 3
            || !code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let code: u16 = code.parse().map_err(|_| invalid())?;
        if code < 100 {
            return Err(invalid());
        }
        let reason = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok((code, reason))
    }

    /// Consume complete lines from buf. Returns the head once the empty line
    /// ending it has been read.
    pub fn receive(&mut self, buf: &mut BytesMut) -> Result<Option<ResponseHead>, HttpError> {
        loop {
            let line_end = match Self::find_crlf(buf) {
                Some(n) => n,
                None => {
                    if self.consumed + buf.len() > self.max_size {
                        return Err(HttpError::HeadTooLarge(self.max_size));
                    }
                    return Ok(None);
                }
            };
            self.consumed += line_end + 2;
            if self.consumed > self.max_size {
                return Err(HttpError::HeadTooLarge(self.max_size));
            }
            let line = buf.split_to(line_end + 2);
            let line_str = std::str::from_utf8(&line[..line_end])
                .map_err(|_| HttpError::InvalidHeader(String::from_utf8_lossy(&line).into_owned()))?;
            match self.state {
                HeadState::StatusLine => {
                    let (code, reason) = Self::parse_status_line(line_str)?;
                    self.code = code;
                    self.reason = reason;
                    self.state = HeadState::Headers;
                }
                HeadState::Headers => {
                    if line_end == 0 {
                        let head = ResponseHead {
                            code: self.code,
                            reason: self.reason.take(),
                            headers: std::mem::take(&mut self.headers),
                        };
                        self.state = HeadState::StatusLine;
                        if (100..200).contains(&head.code) && head.code != 101 {
                            self.consumed = 0;
                            tracing::trace!(code = head.code, "skipping interim response");
                            continue;
                        }
                        return Ok(Some(head));
                    }
                    if line_str.starts_with([' ', '\t']) {
                        // obs-fold
                        return Err(HttpError::InvalidHeader(line_str.to_string()));
                    }
                    match line_str.split_once(':') {
                        Some((name, value)) if !name.is_empty() && !name.contains([' ', '\t']) => {
                            self.headers.append(name, value.trim());
                        }
                        _ => return Err(HttpError::InvalidHeader(line_str.to_string())),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[u8]) -> Result<Option<ResponseHead>, HttpError> {
        let mut p = HeadParser::new(64 * 1024);
        let mut buf = BytesMut::from(input);
        p.receive(&mut buf)
    }

    #[test]
    fn status_headers_and_leftover() {
        let mut p = HeadParser::new(1024);
        let mut buf = BytesMut::from(
            &b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nX-A: 1\r\n\r\n5\r\nhello"[..],
        );
        let head = p.receive(&mut buf).unwrap().unwrap();
        assert_eq!(head.code, 200);
        assert_eq!(head.reason.as_deref(), Some("OK"));
        assert!(head.is_chunked());
        assert!(head.is_success());
        assert_eq!(head.headers.get("x-a"), Some("1"));
        assert_eq!(&buf[..], b"5\r\nhello");
    }

    #[test]
    fn incomplete_head_needs_more() {
        let mut p = HeadParser::new(1024);
        let mut buf = BytesMut::from(&b"HTTP/1.1 404 Not Found\r\nContent-Le"[..]);
        assert!(p.receive(&mut buf).unwrap().is_none());
        buf.extend_from_slice(b"ngth: 0\r\n\r\n");
        let head = p.receive(&mut buf).unwrap().unwrap();
        assert_eq!(head.code, 404);
        assert_eq!(head.content_length(), Some(0));
        assert!(!head.is_success());
    }

    #[test]
    fn missing_reason_is_allowed() {
        let head = parse(b"HTTP/1.1 204\r\n\r\n").unwrap().unwrap();
        assert_eq!(head.code, 204);
        assert!(head.reason.is_none());
    }

    #[test]
    fn interim_responses_are_skipped() {
        let head = parse(b"HTTP/1.1 100 Continue\r\n\r\nHTTP/1.1 103 Early Hints\r\nLink: </a>\r\n\r\nHTTP/1.1 200 OK\r\n\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(head.code, 200);
        assert!(head.headers.is_empty());
    }

    #[test]
    fn chunked_must_be_last_coding() {
        let head = parse(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: gzip, chunked\r\n\r\n")
            .unwrap()
            .unwrap();
        assert!(head.is_chunked());
        let head = parse(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked, gzip\r\n\r\n")
            .unwrap()
            .unwrap();
        assert!(!head.is_chunked());
    }

    #[test]
    fn repeated_headers_are_joined() {
        let head = parse(b"HTTP/1.1 200 OK\r\nVary: Accept\r\nVary: Origin\r\n\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(head.headers.get("Vary"), Some("Accept, Origin"));
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(matches!(parse(b"HTTX/1.1 200 OK\r\n"), Err(HttpError::InvalidStatusLine(_))));
        assert!(matches!(parse(b"HTTP/1.1 2000 OK\r\n"), Err(HttpError::InvalidStatusLine(_))));
        assert!(matches!(
            parse(b"HTTP/1.1 200 OK\r\nno colon here\r\n\r\n"),
            Err(HttpError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse(b"HTTP/1.1 200 OK\r\nX-A: 1\r\n continued\r\n\r\n"),
            Err(HttpError::InvalidHeader(_))
        ));
    }

    #[test]
    fn head_size_is_limited() {
        let mut p = HeadParser::new(32);
        let mut buf = BytesMut::from(&b"HTTP/1.1 200 OK\r\nX-Long: aaaaaaaaaaaaaaaaaaaa\r\n\r\n"[..]);
        assert!(matches!(p.receive(&mut buf), Err(HttpError::HeadTooLarge(32))));
    }

    #[test]
    fn head_limit_applies_per_interim_response() {
        let mut p = HeadParser::new(48);
        let mut buf = BytesMut::new();
        for _ in 0..4 {
            buf.extend_from_slice(b"HTTP/1.1 103 Early Hints\r\nLink: </a>\r\n\r\n");
        }
        buf.extend_from_slice(b"HTTP/1.1 200 OK\r\nX-A: 1\r\n\r\n");
        let head = p.receive(&mut buf).unwrap().unwrap();
        assert_eq!(head.code, 200);
    }
}

/*
 * chunked.rs
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

//! Chunked transfer-coding push decoder (RFC 9112 §7.1).
//!
//! ```text
//! chunked-body = *chunk last-chunk trailer-section CRLF
//! chunk        = chunk-size [ chunk-ext ] CRLF chunk-data CRLF
//! last-chunk   = 1*("0") [ chunk-ext ] CRLF
//! ```
//!
//! Feed bytes via `receive`; the handler sees each chunk header, every piece
//! of chunk data as it arrives and each trailer field. `receive` returns after
//! every complete chunk so the caller can consume it before the next one.

use bytes::{Buf, BytesMut};

use crate::error::ChunkError;

/// Longest chunk-size or trailer line accepted, CRLF excluded.
pub const MAX_LINE_LEN: usize = 8192;

/// Callbacks for chunk decoding events.
pub trait ChunkHandler {
    /// A chunk-size line was parsed. `size` 0 is the last chunk.
    fn chunk_header(&mut self, size: u64, extensions: &str);

    /// Chunk data. `remaining` is how much of the current chunk is still to come.
    fn chunk_body(&mut self, remaining: u64, data: &[u8]);

    /// A trailer field after the last chunk.
    fn trailer(&mut self, name: &str, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    Size,
    Data,
    /// Chunk data complete, CRLF expected.
    DataEnd,
    Trailer,
    Done,
}

/// Outcome of one `receive` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Buffer exhausted mid-chunk; feed more bytes.
    NeedMore,
    /// A chunk and its closing CRLF were consumed.
    Chunk,
    /// Last chunk and trailer section consumed.
    End,
}

pub struct ChunkDecoder {
    state: ChunkState,
    remaining: u64,
}

impl ChunkDecoder {
    pub fn new() -> Self {
        Self {
            state: ChunkState::Size,
            remaining: 0,
        }
    }

    pub fn state(&self) -> ChunkState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = ChunkState::Size;
        self.remaining = 0;
    }

    /// Find CRLF in buf; return the offset of CR, or None if not found.
    fn find_crlf(buf: &[u8]) -> Option<usize> {
        buf.windows(2).position(|w| w == b"\r\n")
    }

    /// Split one CRLF-terminated line off the front of buf, without the CRLF.
    fn take_line(buf: &mut BytesMut) -> Result<Option<BytesMut>, ChunkError> {
        match Self::find_crlf(buf) {
            Some(n) if n > MAX_LINE_LEN => Err(ChunkError::LineTooLong(MAX_LINE_LEN)),
            Some(n) => {
                let line = buf.split_to(n);
                buf.advance(2);
                Ok(Some(line))
            }
            None if buf.len() > MAX_LINE_LEN + 1 => Err(ChunkError::LineTooLong(MAX_LINE_LEN)),
            None => Ok(None),
        }
    }

    /// Parse `chunk-size [ chunk-ext ]`. Returns the size and the raw extension
    /// text after the first `;`.
    fn parse_size_line(line: &str) -> Result<(u64, &str), ChunkError> {
        let (size_part, ext) = match line.find(';') {
            Some(i) => (&line[..i], line[i + 1..].trim()),
            None => (line, ""),
        };
        let hex = size_part.trim_end_matches([' ', '\t']);
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChunkError::InvalidChunkSize(line.to_string()));
        }
        let size = u64::from_str_radix(hex, 16)
            .map_err(|_| ChunkError::InvalidChunkSize(line.to_string()))?;
        Ok((size, ext))
    }

    /// Consume and parse as much as possible from buf, stopping after each
    /// complete chunk. Partial data remains in buf.
    pub fn receive<H: ChunkHandler>(
        &mut self,
        buf: &mut BytesMut,
        handler: &mut H,
    ) -> Result<Progress, ChunkError> {
        loop {
            match self.state {
                ChunkState::Size => {
                    let line = match Self::take_line(buf)? {
                        Some(l) => l,
                        None => return Ok(Progress::NeedMore),
                    };
                    let line = std::str::from_utf8(&line).map_err(|_| ChunkError::InvalidUtf8)?;
                    let (size, ext) = Self::parse_size_line(line)?;
                    handler.chunk_header(size, ext);
                    if size == 0 {
                        self.state = ChunkState::Trailer;
                    } else {
                        self.remaining = size;
                        self.state = ChunkState::Data;
                    }
                }
                ChunkState::Data => {
                    if buf.is_empty() {
                        return Ok(Progress::NeedMore);
                    }
                    let to_read = self.remaining.min(buf.len() as u64) as usize;
                    let data = buf.split_to(to_read);
                    self.remaining -= to_read as u64;
                    handler.chunk_body(self.remaining, &data);
                    if self.remaining == 0 {
                        self.state = ChunkState::DataEnd;
                    }
                }
                ChunkState::DataEnd => {
                    if buf.len() < 2 {
                        if buf.first().is_some_and(|&b| b != b'\r') {
                            return Err(ChunkError::MissingCrlf);
                        }
                        return Ok(Progress::NeedMore);
                    }
                    if &buf[..2] != b"\r\n" {
                        return Err(ChunkError::MissingCrlf);
                    }
                    buf.advance(2);
                    self.state = ChunkState::Size;
                    return Ok(Progress::Chunk);
                }
                ChunkState::Trailer => {
                    let line = match Self::take_line(buf)? {
                        Some(l) => l,
                        None => return Ok(Progress::NeedMore),
                    };
                    if line.is_empty() {
                        self.state = ChunkState::Done;
                        return Ok(Progress::End);
                    }
                    let line = std::str::from_utf8(&line).map_err(|_| ChunkError::InvalidUtf8)?;
                    match line.split_once(':') {
                        Some((name, value))
                            if !name.is_empty() && !name.contains([' ', '\t']) =>
                        {
                            handler.trailer(name, value.trim());
                        }
                        _ => return Err(ChunkError::InvalidTrailer(line.to_string())),
                    }
                }
                ChunkState::Done => return Ok(Progress::End),
            }
        }
    }
}

impl Default for ChunkDecoder {
    fn default() -> Self {
        Self::new()
    }
}

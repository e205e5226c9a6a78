/*
 * cursor.rs
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

//! Pull-based streaming of a chunked response body.
//!
//! A [`ChunkCursor`] decodes one chunk per [`advance`](ChunkCursor::advance),
//! reading from the transport only when the bytes already buffered do not
//! hold a complete chunk. The payload lives in a single buffer that every
//! `advance` overwrites; the borrow returned by
//! [`current_payload`](ChunkCursor::current_payload) or
//! [`pull`](ChunkCursor::pull) must end before the next call, which the
//! borrow checker enforces. Copy the bytes out to keep them longer.
//!
//! States: `Ready` → `HasChunk` (repeatable) → `Finished` or `Errored`. Both
//! terminal states are sticky: further `advance` calls return `false` and do
//! not touch the stored error. There are no retries.

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::ChunkError;
use crate::http::h1::chunked::{ChunkDecoder, ChunkHandler, Progress};
use crate::http::headers::HeaderMap;
use crate::http::transport::TransportAdapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No chunk decoded yet.
    Ready,
    /// `current_payload` holds the last decoded chunk.
    HasChunk,
    /// Terminal chunk reached cleanly.
    Finished,
    /// Transport or framing failure; see `last_error`.
    Errored,
}

/// Result of [`ChunkCursor::pull`].
#[derive(Debug, PartialEq, Eq)]
pub enum Pull<'a> {
    /// Payload of the next chunk, valid until the cursor is used again.
    Chunk(&'a [u8]),
    /// The body ended cleanly.
    End,
    /// Decoding stopped on this error.
    Error(&'a ChunkError),
}

/// Collects one chunk's data into the reused payload buffer.
struct PayloadSink<'a> {
    payload: &'a mut Vec<u8>,
    trailers: &'a mut HeaderMap,
    limit: u64,
    read_size: usize,
    oversized: Option<u64>,
}

impl ChunkHandler for PayloadSink<'_> {
    fn chunk_header(&mut self, size: u64, extensions: &str) {
        self.payload.clear();
        if size > self.limit {
            self.oversized = Some(size);
        } else {
            // Declared sizes are untrusted; grow as data arrives.
            let hint = size.min(self.read_size as u64) as usize;
            self.payload.reserve(hint);
        }
        trace!(size, extensions, "chunk header");
    }

    fn chunk_body(&mut self, _remaining: u64, data: &[u8]) {
        if self.oversized.is_none() {
            self.payload.extend_from_slice(data);
        }
    }

    fn trailer(&mut self, name: &str, value: &str) {
        self.trailers.append(name, value);
    }
}

/// Decoding state for one chunked response body.
pub struct ChunkCursor {
    state: CursorState,
    decoder: ChunkDecoder,
    buf: BytesMut,
    payload: Vec<u8>,
    error: Option<ChunkError>,
    trailers: HeaderMap,
    max_chunk_size: u64,
    read_size: usize,
}

impl ChunkCursor {
    pub fn new() -> Self {
        Self::with_config(&ClientConfig::default())
    }

    /// Cursor using the chunk size limit and read size from `config`.
    pub fn with_config(config: &ClientConfig) -> Self {
        Self {
            state: CursorState::Ready,
            decoder: ChunkDecoder::new(),
            buf: BytesMut::with_capacity(config.read_size),
            payload: Vec::new(),
            error: None,
            trailers: HeaderMap::new(),
            max_chunk_size: config.max_chunk_size,
            read_size: config.read_size.max(1),
        }
    }

    /// Start from body bytes already read (e.g. past the response head).
    pub fn with_buffered(mut self, bytes: BytesMut) -> Self {
        self.buf = bytes;
        self
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// True once no further data will be produced, cleanly or not.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, CursorState::Finished | CursorState::Errored)
    }

    /// The error that stopped decoding; `None` while running or after a clean end.
    pub fn last_error(&self) -> Option<&ChunkError> {
        self.error.as_ref()
    }

    /// Payload of the chunk decoded by the last successful `advance`. Empty
    /// before the first chunk and after the body ends.
    pub fn current_payload(&self) -> &[u8] {
        &self.payload
    }

    /// Trailer fields received after the last chunk.
    pub fn trailers(&self) -> &HeaderMap {
        &self.trailers
    }

    /// Body bytes buffered but not yet decoded.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    fn fail(&mut self, error: ChunkError) -> bool {
        debug!(error = %error, "chunked body failed");
        self.payload.clear();
        self.error = Some(error);
        self.state = CursorState::Errored;
        false
    }

    /// Decode the next chunk, reading from `transport` as needed.
    ///
    /// Returns `true` when a chunk payload is available, `false` when the body
    /// has ended (clean end or error; tell them apart with `last_error`).
    pub fn advance<T: TransportAdapter + ?Sized>(&mut self, transport: &mut T) -> bool {
        if self.is_finished() {
            return false;
        }
        loop {
            let mut sink = PayloadSink {
                payload: &mut self.payload,
                trailers: &mut self.trailers,
                limit: self.max_chunk_size,
                read_size: self.read_size,
                oversized: None,
            };
            let progress = self.decoder.receive(&mut self.buf, &mut sink);
            let oversized = sink.oversized;
            if let Some(size) = oversized {
                return self.fail(ChunkError::ChunkTooLarge {
                    size,
                    limit: self.max_chunk_size,
                });
            }
            match progress {
                Err(e) => return self.fail(e),
                Ok(Progress::Chunk) => {
                    trace!(len = self.payload.len(), "chunk ready");
                    self.state = CursorState::HasChunk;
                    return true;
                }
                Ok(Progress::End) => {
                    debug!(trailers = self.trailers.len(), "chunked body complete");
                    if !self.buf.is_empty() {
                        debug!(bytes = self.buf.len(), "bytes left after last chunk");
                    }
                    self.payload.clear();
                    self.state = CursorState::Finished;
                    return false;
                }
                Ok(Progress::NeedMore) => {
                    self.buf.reserve(self.read_size);
                    match transport.receive(&mut self.buf) {
                        Ok(0) => return self.fail(ChunkError::UnexpectedEof),
                        Ok(n) => trace!(bytes = n, "read chunked body bytes"),
                        Err(e) => {
                            warn!(error = %e, "transport read failed mid-body");
                            return self.fail(ChunkError::Transport(e));
                        }
                    }
                }
            }
        }
    }

    /// `advance` as a tagged result.
    ///
    /// ```no_run
    /// # use hypertext_core::http::{ChunkCursor, Pull, TransportAdapter};
    /// # fn demo<T: TransportAdapter>(mut cursor: ChunkCursor, transport: &mut T) {
    /// let mut body = Vec::new();
    /// loop {
    ///     match cursor.pull(transport) {
    ///         Pull::Chunk(data) => body.extend_from_slice(data),
    ///         Pull::End => break,
    ///         Pull::Error(e) => panic!("{e}"),
    ///     }
    /// }
    /// # }
    /// ```
    pub fn pull<T: TransportAdapter + ?Sized>(&mut self, transport: &mut T) -> Pull<'_> {
        if self.advance(transport) {
            return Pull::Chunk(&self.payload);
        }
        match &self.error {
            Some(e) => Pull::Error(e),
            None => Pull::End,
        }
    }
}

impl Default for ChunkCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward-only walk over a cursor's chunks.
///
/// As an [`Iterator`] it yields owned copies of each payload. The explicit
/// methods mirror a cursor position: [`get`](Self::get) views the current
/// payload, [`advance`](Self::advance) moves on, and
/// [`advance_post`](Self::advance_post) returns a copy of the current payload
/// taken before moving on, since moving on overwrites it. Compare against
/// [`ChunkIter::end`] to detect the end.
pub struct ChunkIter<'a, T: ?Sized> {
    inner: Option<(&'a mut ChunkCursor, &'a mut T)>,
    finished: bool,
}

impl<'a, T: TransportAdapter + ?Sized> ChunkIter<'a, T> {
    pub fn new(cursor: &'a mut ChunkCursor, transport: &'a mut T) -> Self {
        let finished = cursor.is_finished();
        Self {
            inner: Some((cursor, transport)),
            finished,
        }
    }

    /// The past-the-end position.
    pub fn end() -> Self {
        Self {
            inner: None,
            finished: true,
        }
    }

    pub fn get(&self) -> &[u8] {
        match &self.inner {
            Some((cursor, _)) => cursor.current_payload(),
            None => &[],
        }
    }

    pub fn advance(&mut self) -> &mut Self {
        self.finished = match &mut self.inner {
            Some((cursor, transport)) => !cursor.advance(&mut **transport),
            None => true,
        };
        self
    }

    /// Copy the current payload, then advance.
    pub fn advance_post(&mut self) -> Bytes {
        let snapshot = Bytes::copy_from_slice(self.get());
        self.advance();
        snapshot
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_error(&self) -> Option<&ChunkError> {
        self.inner.as_ref().and_then(|(cursor, _)| cursor.last_error())
    }
}

impl<T: TransportAdapter + ?Sized> Iterator for ChunkIter<'_, T> {
    type Item = Bytes;

    fn next(&mut self) -> Option<Bytes> {
        if self.finished {
            return None;
        }
        self.advance();
        if self.finished {
            None
        } else {
            Some(Bytes::copy_from_slice(self.get()))
        }
    }
}

/// Compares finished flags only, so equality is meaningful against
/// [`ChunkIter::end`]; two live iterators always compare equal.
impl<T: ?Sized> PartialEq for ChunkIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.finished == other.finished
    }
}

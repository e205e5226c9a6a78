/*
 * lib.rs
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


//! Hypertext core: a transport-agnostic HTTP/1.1 client.
//!
//! Requests are assembled from typed parameters ([`http::params`]) whose
//! contracts are checked at compile time. Responses with chunked bodies are
//! consumed lazily through a [`http::ChunkCursor`] that pulls bytes from a
//! caller-supplied [`http::TransportAdapter`] one chunk at a time.

pub mod config;
pub mod error;
pub mod http;

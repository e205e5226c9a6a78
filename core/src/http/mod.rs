/*
 * mod.rs
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


//! HTTP client core: parameter model, request assembly, transport contract
//! and pull-based chunked body streaming.

mod assemble;
mod auth;
mod capability;
mod cursor;
mod exchange;
pub mod h1;
mod headers;
pub mod params;
mod request;
mod response;
mod transport;
mod wire;

pub use assemble::assemble;
pub use auth::{BasicAuth, BearerAuth};
pub use capability::{Authorization, HeaderSource, NamedArg, Parameter, ParameterSet};
pub use cursor::{ChunkCursor, ChunkIter, CursorState, Pull};
pub use exchange::exchange;
pub use headers::HeaderMap;
pub use params::Param;
pub use request::{Method, Request, UnknownMethod};
pub use response::Response;
pub use transport::{Target, TlsIdentity, TlsVerify, TransportAdapter};
pub use wire::encode_request;

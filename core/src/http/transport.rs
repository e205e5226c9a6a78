/*
 * transport.rs
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

//! Transport adapter contract: what a network layer must provide.
//!
//! This crate never opens sockets. A transport owns the connection (plain TCP
//! or TLS), writes requests and hands back response bytes on demand. It is
//! borrowed for the duration of each call and never stored by the core.
//! Blocking is expected; any timeout (see `Request::timeout`) is the
//! transport's to enforce.

use std::path::PathBuf;

use bytes::BytesMut;

use crate::error::TransportError;
use crate::http::request::Request;

/// Client certificate for mutual TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsIdentity {
    /// PEM certificate chain (may also contain the key).
    pub cert: PathBuf,
    /// PEM private key when not bundled with `cert`.
    pub key: Option<PathBuf>,
}

/// Per-request override of server certificate verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsVerify {
    /// Verify (true) or skip verification (false).
    Enabled(bool),
    /// Verify against this CA bundle instead of the platform roots.
    CaBundle(PathBuf),
}

/// A network layer the core can send requests through and pull response
/// bytes from.
pub trait TransportAdapter {
    /// Send `request` over plain TCP. Returns the number of bytes written.
    fn send(
        &mut self,
        request: &Request,
        host: &str,
        port: u16,
        verify: bool,
    ) -> Result<usize, TransportError>;

    /// Send `request` over TLS, optionally presenting a client identity and
    /// overriding verification.
    fn send_secure(
        &mut self,
        request: &Request,
        host: &str,
        port: u16,
        verify: bool,
        identity: Option<&TlsIdentity>,
        verify_override: Option<&TlsVerify>,
    ) -> Result<usize, TransportError>;

    /// Append available response bytes to `buf`, blocking until at least one
    /// byte arrives. `Ok(0)` means the peer closed the stream.
    fn receive(&mut self, buf: &mut BytesMut) -> Result<usize, TransportError>;

    fn close(&mut self) -> Result<(), TransportError>;
}

impl<T: TransportAdapter + ?Sized> TransportAdapter for &mut T {
    fn send(
        &mut self,
        request: &Request,
        host: &str,
        port: u16,
        verify: bool,
    ) -> Result<usize, TransportError> {
        (**self).send(request, host, port, verify)
    }

    fn send_secure(
        &mut self,
        request: &Request,
        host: &str,
        port: u16,
        verify: bool,
        identity: Option<&TlsIdentity>,
        verify_override: Option<&TlsVerify>,
    ) -> Result<usize, TransportError> {
        (**self).send_secure(request, host, port, verify, identity, verify_override)
    }

    fn receive(&mut self, buf: &mut BytesMut) -> Result<usize, TransportError> {
        (**self).receive(buf)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        (**self).close()
    }
}

impl<T: TransportAdapter + ?Sized> TransportAdapter for Box<T> {
    fn send(
        &mut self,
        request: &Request,
        host: &str,
        port: u16,
        verify: bool,
    ) -> Result<usize, TransportError> {
        (**self).send(request, host, port, verify)
    }

    fn send_secure(
        &mut self,
        request: &Request,
        host: &str,
        port: u16,
        verify: bool,
        identity: Option<&TlsIdentity>,
        verify_override: Option<&TlsVerify>,
    ) -> Result<usize, TransportError> {
        (**self).send_secure(request, host, port, verify, identity, verify_override)
    }

    fn receive(&mut self, buf: &mut BytesMut) -> Result<usize, TransportError> {
        (**self).receive(buf)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        (**self).close()
    }
}

/// Where a request goes: host, port, plain or TLS, and TLS options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub verify: bool,
    pub identity: Option<TlsIdentity>,
    pub verify_override: Option<TlsVerify>,
}

impl Target {
    /// Plain HTTP target.
    pub fn plain(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            secure: false,
            verify: true,
            identity: None,
            verify_override: None,
        }
    }

    /// HTTPS target with verification on.
    pub fn secure(host: impl Into<String>, port: u16) -> Self {
        Self {
            secure: true,
            ..Self::plain(host, port)
        }
    }

    pub fn with_identity(mut self, identity: TlsIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn with_verify(mut self, verify: TlsVerify) -> Self {
        self.verify_override = Some(verify);
        self
    }

    /// Dispatch to `send` or `send_secure` according to `secure`.
    pub fn send<T: TransportAdapter + ?Sized>(
        &self,
        transport: &mut T,
        request: &Request,
    ) -> Result<usize, TransportError> {
        self.send_with_verify(transport, request, self.verify)
    }

    /// As `send`, passing `verify` in place of the target's own flag.
    pub fn send_with_verify<T: TransportAdapter + ?Sized>(
        &self,
        transport: &mut T,
        request: &Request,
        verify: bool,
    ) -> Result<usize, TransportError> {
        if self.secure {
            transport.send_secure(
                request,
                &self.host,
                self.port,
                verify,
                self.identity.as_ref(),
                self.verify_override.as_ref(),
            )
        } else {
            transport.send(request, &self.host, self.port, verify)
        }
    }
}

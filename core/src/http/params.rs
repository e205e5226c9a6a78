/*
 * params.rs
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

//! Request parameters and their constructors.
//!
//! Each kind is a small immutable holder exposing its value through
//! [`Parameter::get`]. Build them with the free functions ([`method`],
//! [`headers`], [`headers_from`], [`auth`], [`timeout`], [`timeout_ms`],
//! [`timeout_secs`], [`stream`]) and hand them to
//! [`assemble`](crate::http::assemble) as a tuple, or convert them into
//! [`Param`] when the list is only known at runtime.

use std::fmt;
use std::time::Duration;

use crate::http::capability::{Authorization, HeaderSource, NamedArg, Parameter, ParameterSet};
use crate::http::headers::HeaderMap;
use crate::http::request::{Method, Request};

/// The HTTP method for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodParam {
    method: Method,
}

impl MethodParam {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl NamedArg for MethodParam {
    fn name() -> &'static str {
        "method"
    }
}

impl Parameter for MethodParam {
    type Value = Method;

    fn get(&self) -> &Method {
        &self.method
    }

    fn apply(self, request: &mut Request) {
        request.method = self.method;
    }
}

/// Headers to send. Applying merges them into the request's headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadersParam {
    headers: HeaderMap,
}

impl HeadersParam {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Copy every entry of any header-capable map.
    pub fn from_source<H: HeaderSource>(source: &H) -> Self {
        let headers = source
            .header_entries()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .collect();
        Self { headers }
    }
}

impl NamedArg for HeadersParam {
    fn name() -> &'static str {
        "headers"
    }
}

impl Parameter for HeadersParam {
    type Value = HeaderMap;

    fn get(&self) -> &HeaderMap {
        &self.headers
    }

    fn apply(self, request: &mut Request) {
        request.headers.merge(&self.headers);
    }
}

/// The credential for the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthParam<A> {
    auth: A,
}

impl<A: Authorization> AuthParam<A> {
    pub fn new(auth: A) -> Self {
        Self { auth }
    }
}

impl<A> fmt::Debug for AuthParam<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthParam").finish_non_exhaustive()
    }
}

impl<A> NamedArg for AuthParam<A> {
    fn name() -> &'static str {
        "auth"
    }
}

impl<A: Authorization> Parameter for AuthParam<A> {
    type Value = A;

    fn get(&self) -> &A {
        &self.auth
    }

    fn apply(self, request: &mut Request) {
        let encoded = self.auth.encode(request);
        request.authorization = Some(encoded);
    }
}

/// How long the transport waits for the server. Held at millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutParam {
    timeout: Duration,
}

impl TimeoutParam {
    pub fn from_millis(millis: u64) -> Self {
        Self {
            timeout: Duration::from_millis(millis),
        }
    }

    /// Seconds beyond what fits in `u64` milliseconds saturate.
    pub fn from_secs(secs: u64) -> Self {
        Self::from_millis(secs.saturating_mul(1000))
    }

    /// Sub-millisecond precision is dropped.
    pub fn from_duration(d: Duration) -> Self {
        Self::from_millis(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl NamedArg for TimeoutParam {
    fn name() -> &'static str {
        "timeout"
    }
}

impl Parameter for TimeoutParam {
    type Value = Duration;

    fn get(&self) -> &Duration {
        &self.timeout
    }

    fn apply(self, request: &mut Request) {
        request.timeout = Some(self.timeout);
    }
}

/// Stream the response body chunk by chunk. Off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamParam {
    stream: bool,
}

impl StreamParam {
    pub fn new(stream: bool) -> Self {
        Self { stream }
    }
}

impl NamedArg for StreamParam {
    fn name() -> &'static str {
        "stream"
    }
}

impl Parameter for StreamParam {
    type Value = bool;

    fn get(&self) -> &bool {
        &self.stream
    }

    fn apply(self, request: &mut Request) {
        request.stream = self.stream;
    }
}

/// Any parameter, for lists built at runtime. Credentials are boxed.
pub enum Param {
    Method(MethodParam),
    Headers(HeadersParam),
    Auth(AuthParam<Box<dyn Authorization>>),
    Timeout(TimeoutParam),
    Stream(StreamParam),
}

impl Param {
    pub fn name(&self) -> &'static str {
        match self {
            Param::Method(_) => MethodParam::name(),
            Param::Headers(_) => HeadersParam::name(),
            Param::Auth(_) => AuthParam::<Box<dyn Authorization>>::name(),
            Param::Timeout(_) => TimeoutParam::name(),
            Param::Stream(_) => StreamParam::name(),
        }
    }

    pub fn apply(self, request: &mut Request) {
        match self {
            Param::Method(p) => p.apply(request),
            Param::Headers(p) => p.apply(request),
            Param::Auth(p) => p.apply(request),
            Param::Timeout(p) => p.apply(request),
            Param::Stream(p) => p.apply(request),
        }
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Method(p) => fmt::Debug::fmt(p, f),
            Param::Headers(p) => fmt::Debug::fmt(p, f),
            Param::Auth(p) => fmt::Debug::fmt(p, f),
            Param::Timeout(p) => fmt::Debug::fmt(p, f),
            Param::Stream(p) => fmt::Debug::fmt(p, f),
        }
    }
}

impl From<MethodParam> for Param {
    fn from(p: MethodParam) -> Self {
        Param::Method(p)
    }
}

impl From<HeadersParam> for Param {
    fn from(p: HeadersParam) -> Self {
        Param::Headers(p)
    }
}

impl<A: Authorization + 'static> From<AuthParam<A>> for Param {
    fn from(p: AuthParam<A>) -> Self {
        let boxed: Box<dyn Authorization> = Box::new(p.auth);
        Param::Auth(AuthParam::new(boxed))
    }
}

impl From<TimeoutParam> for Param {
    fn from(p: TimeoutParam) -> Self {
        Param::Timeout(p)
    }
}

impl From<StreamParam> for Param {
    fn from(p: StreamParam) -> Self {
        Param::Stream(p)
    }
}

impl ParameterSet for Param {
    fn apply_to(self, request: &mut Request) {
        self.apply(request);
    }
}

impl ParameterSet for Vec<Param> {
    fn apply_to(self, request: &mut Request) {
        for p in self {
            p.apply(request);
        }
    }
}

pub fn method(method: Method) -> MethodParam {
    MethodParam::new(method)
}

/// Headers from a literal list of `(name, value)` pairs.
pub fn headers<I, K, V>(pairs: I) -> HeadersParam
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let headers = pairs
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect();
    HeadersParam::new(headers)
}

/// Headers copied from any [`HeaderSource`].
pub fn headers_from<H: HeaderSource>(source: &H) -> HeadersParam {
    HeadersParam::from_source(source)
}

/// Credential parameter. `A` must implement [`Authorization`]:
///
/// ```compile_fail
/// use hypertext_core::http::params;
///
/// struct NotACredential;
/// let _ = params::auth(NotACredential);
/// ```
pub fn auth<A: Authorization>(credential: A) -> AuthParam<A> {
    AuthParam::new(credential)
}

pub fn timeout(d: Duration) -> TimeoutParam {
    TimeoutParam::from_duration(d)
}

pub fn timeout_ms(millis: u64) -> TimeoutParam {
    TimeoutParam::from_millis(millis)
}

pub fn timeout_secs(secs: u64) -> TimeoutParam {
    TimeoutParam::from_secs(secs)
}

pub fn stream(enabled: bool) -> StreamParam {
    StreamParam::new(enabled)
}

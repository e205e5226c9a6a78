/*
 * assemble.rs
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

//! Request assembly: apply a parameter set to a base request.
//!
//! Parameters are applied in the order given. Two parameters of the same kind
//! resolve last-wins; header parameters merge per header name. No I/O happens
//! here and nothing can fail at runtime.

use crate::http::capability::ParameterSet;
use crate::http::request::Request;

/// Apply `params` to `base` and return the finished request.
///
/// ```
/// use hypertext_core::http::{assemble, params, Method, Request};
///
/// let req = assemble(
///     Request::new(Method::Get, "/feed"),
///     (
///         params::method(Method::Post),
///         params::headers([("Accept", "application/json")]),
///         params::timeout_secs(5),
///         params::stream(true),
///     ),
/// );
/// assert_eq!(req.method, Method::Post);
/// assert!(req.stream);
/// ```
pub fn assemble<P: ParameterSet>(base: Request, params: P) -> Request {
    let mut request = base;
    request.apply(params);
    request
}

impl Request {
    /// Apply a parameter set in place.
    pub fn apply<P: ParameterSet>(&mut self, params: P) -> &mut Self {
        params.apply_to(self);
        tracing::trace!(
            method = %self.method,
            target = %self.target,
            headers = self.headers.len(),
            stream = self.stream,
            "request assembled"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::http::auth::BasicAuth;
    use crate::http::capability::Authorization;
    use crate::http::params::{self, Param};
    use crate::http::request::Method;

    /// Signs the request target into a header and returns a derived credential.
    struct TargetSigner;

    impl Authorization for TargetSigner {
        fn encode(&self, request: &mut Request) -> String {
            request.header("X-Signed-Target", request.target.clone());
            format!("Sig {}", request.target.len())
        }
    }

    #[test]
    fn later_headers_win_per_key() {
        let req = assemble(
            Request::default(),
            (
                params::headers([("Accept", "text/html"), ("X-A", "1")]),
                params::headers([("accept", "application/json"), ("X-B", "2")]),
            ),
        );
        assert_eq!(req.headers.get("Accept"), Some("application/json"));
        assert_eq!(req.headers.get("X-A"), Some("1"));
        assert_eq!(req.headers.get("X-B"), Some("2"));
        assert_eq!(req.headers.len(), 3);
    }

    #[test]
    fn headers_merge_into_base_request() {
        let mut base = Request::default();
        base.header("User-Agent", "hypertext/0.1");
        let req = assemble(base, (params::headers([("Accept", "*/*")]),));
        assert_eq!(req.headers.get("user-agent"), Some("hypertext/0.1"));
        assert_eq!(req.headers.get("accept"), Some("*/*"));
    }

    #[test]
    fn later_timeout_wins() {
        let req = assemble(
            Request::default(),
            (params::timeout_secs(30), params::timeout_ms(1500)),
        );
        assert_eq!(req.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn later_method_and_stream_win() {
        let req = assemble(
            Request::default(),
            (
                params::method(Method::Put),
                params::stream(true),
                params::method(Method::Delete),
                params::stream(false),
            ),
        );
        assert_eq!(req.method, Method::Delete);
        assert!(!req.stream);
    }

    #[test]
    fn order_only_matters_for_conflicts() {
        let a = assemble(
            Request::default(),
            (params::stream(true), params::timeout_ms(10), params::method(Method::Head)),
        );
        let b = assemble(
            Request::default(),
            (params::method(Method::Head), params::timeout_ms(10), params::stream(true)),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn plain_string_credential() {
        let req = assemble(Request::default(), (params::auth("Token abc"),));
        assert_eq!(req.authorization.as_deref(), Some("Token abc"));
    }

    #[test]
    fn request_aware_credential_can_modify_request() {
        let req = assemble(
            Request::new(Method::Get, "/inbox"),
            (params::auth(TargetSigner),),
        );
        assert_eq!(req.authorization.as_deref(), Some("Sig 6"));
        assert_eq!(req.headers.get("X-Signed-Target"), Some("/inbox"));
    }

    #[test]
    fn later_credential_wins() {
        let req = assemble(
            Request::default(),
            (
                params::auth(BasicAuth::new("a", "b")),
                params::auth(String::from("Bearer t")),
            ),
        );
        assert_eq!(req.authorization.as_deref(), Some("Bearer t"));
    }

    #[test]
    fn runtime_parameter_list() {
        let mut list: Vec<Param> = vec![params::method(Method::Post).into()];
        list.push(params::auth(BasicAuth::new("u", "p")).into());
        list.push(params::timeout_secs(2).into());
        list.push(params::stream(true).into());
        let req = assemble(Request::default(), list);
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.authorization.as_deref(), Some("Basic dTpw"));
        assert_eq!(req.timeout, Some(Duration::from_secs(2)));
        assert!(req.stream);
    }

    #[test]
    fn no_parameters_leave_base_untouched() {
        let base = Request::new(Method::Options, "*");
        let req = assemble(base.clone(), Vec::<Param>::new());
        assert_eq!(req, base);
    }
}

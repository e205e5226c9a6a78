/*
 * capability.rs
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

//! Capability traits for everything that can be plugged into a request.
//!
//! A type is only accepted where one of these traits is a generic bound, so a
//! type missing an operation is a compile error at the call site, before any
//! request exists:
//!
//! - [`Parameter`] / [`NamedArg`]: a typed request parameter with a static name.
//! - [`ParameterSet`]: a group of parameters, every member of which is a `Parameter`.
//! - [`HeaderSource`]: a string-keyed header map that can be read, written and iterated.
//! - [`Authorization`]: a credential that encodes to the `Authorization` value.
//!
//! The transport contract lives in [`transport`](crate::http::transport).

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::http::headers::HeaderMap;
use crate::http::request::Request;

/// A type with a static, compile-time-known name.
pub trait NamedArg {
    fn name() -> &'static str;
}

/// A single request parameter.
pub trait Parameter: NamedArg {
    type Value: ?Sized;

    /// The wrapped value.
    fn get(&self) -> &Self::Value;

    /// Write the value into `request`, replacing whatever an earlier parameter
    /// of the same kind put there.
    fn apply(self, request: &mut Request);
}

/// A set of parameters accepted as a unit by the assembler.
///
/// Implemented for tuples of up to eight elements where every element is a
/// [`Parameter`]; a tuple with one non-parameter member has no impl at all.
///
/// ```compile_fail
/// use hypertext_core::http::{assemble, params, Request};
///
/// // `u8` is not a parameter, so the whole set is rejected.
/// let _ = assemble(Request::default(), (params::stream(true), 7u8));
/// ```
pub trait ParameterSet {
    fn apply_to(self, request: &mut Request);
}

macro_rules! parameter_tuple {
    ($($p:ident),+) => {
        impl<$($p: Parameter),+> ParameterSet for ($($p,)+) {
            #[allow(non_snake_case)]
            fn apply_to(self, request: &mut Request) {
                let ($($p,)+) = self;
                $($p.apply(request);)+
            }
        }
    };
}

parameter_tuple!(A);
parameter_tuple!(A, B);
parameter_tuple!(A, B, C);
parameter_tuple!(A, B, C, D);
parameter_tuple!(A, B, C, D, E);
parameter_tuple!(A, B, C, D, E, F);
parameter_tuple!(A, B, C, D, E, F, G);
parameter_tuple!(A, B, C, D, E, F, G, H);

/// A header map: keys and values convert from `&str`, entries can be looked
/// up, written and iterated in the map's own order.
pub trait HeaderSource {
    type Key: AsRef<str> + for<'a> From<&'a str>;
    type Value: AsRef<str> + for<'a> From<&'a str>;

    fn get_header(&self, name: &str) -> Option<&Self::Value>;

    fn set_header(&mut self, name: Self::Key, value: Self::Value);

    fn header_entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> HeaderSource for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<str> + AsRef<str> + for<'a> From<&'a str>,
    V: AsRef<str> + for<'a> From<&'a str>,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn get_header(&self, name: &str) -> Option<&V> {
        self.get(name)
    }

    fn set_header(&mut self, name: K, value: V) {
        self.insert(name, value);
    }

    fn header_entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V> HeaderSource for BTreeMap<K, V>
where
    K: Ord + Borrow<str> + AsRef<str> + for<'a> From<&'a str>,
    V: AsRef<str> + for<'a> From<&'a str>,
{
    type Key = K;
    type Value = V;

    fn get_header(&self, name: &str) -> Option<&V> {
        self.get(name)
    }

    fn set_header(&mut self, name: K, value: V) {
        self.insert(name, value);
    }

    fn header_entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl HeaderSource for HeaderMap {
    type Key = String;
    type Value = String;

    fn get_header(&self, name: &str) -> Option<&String> {
        self.value_ref(name)
    }

    fn set_header(&mut self, name: String, value: String) {
        self.insert(name, value);
    }

    fn header_entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries().iter().map(|(k, v)| (k, v))
    }
}

/// A credential that produces the encoded `Authorization` header value.
///
/// The request being assembled is passed in mutably so a scheme can read it
/// (method, target) or add headers of its own while computing the value.
/// Plain strings are credentials that ignore the request.
pub trait Authorization {
    fn encode(&self, request: &mut Request) -> String;
}

impl Authorization for str {
    fn encode(&self, _request: &mut Request) -> String {
        self.to_string()
    }
}

impl Authorization for String {
    fn encode(&self, _request: &mut Request) -> String {
        self.clone()
    }
}

impl Authorization for Cow<'_, str> {
    fn encode(&self, _request: &mut Request) -> String {
        self.to_string()
    }
}

impl<A: Authorization + ?Sized> Authorization for &A {
    fn encode(&self, request: &mut Request) -> String {
        (**self).encode(request)
    }
}

impl<A: Authorization + ?Sized> Authorization for Box<A> {
    fn encode(&self, request: &mut Request) -> String {
        (**self).encode(request)
    }
}

// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

lazy_static! {
    /// If a boolean option's value is exactly one of these strings, it is
    /// false. Any other value (or no value at all) means it is true.
    pub static ref FALSITIES: HashSet<&'static str> =
        ["0", "n", "no", "f", "false"].iter().cloned().collect();
}

/// FromArg converts a raw argument value into some type. This is the
/// extension point for custom types: implement it, and the type can be used
/// with all of `Args`' typed accessors.
///
/// Returning None means the value could not be converted. Callers can't tell
/// this apart from the option being missing entirely.
pub trait FromArg<'a>: Sized {
    /// Convert the given value, which was specified explicitly (e.g.
    /// "--key=value" or "--key value").
    fn from_arg(value: &'a str) -> Option<Self>;

    /// Produce a value for an option which was given with no value at all
    /// (e.g. "--key" followed by another option). Most types have no sensible
    /// value for this case.
    fn from_flag() -> Option<Self> {
        None
    }
}

/// Coerce a single stored value (None being a bare flag) into T.
pub(crate) fn coerce<'a, T: FromArg<'a>>(value: Option<&'a str>) -> Option<T> {
    match value {
        None => T::from_flag(),
        Some(value) => T::from_arg(value),
    }
}

impl<'a> FromArg<'a> for &'a str {
    fn from_arg(value: &'a str) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromArg<'a> for String {
    fn from_arg(value: &'a str) -> Option<Self> {
        Some(value.to_owned())
    }
}

impl<'a> FromArg<'a> for bool {
    fn from_arg(value: &'a str) -> Option<Self> {
        Some(!FALSITIES.contains(value))
    }

    fn from_flag() -> Option<Self> {
        Some(true)
    }
}

macro_rules! from_str_impl {
    ($($t:ty),*) => {
        $(
            impl<'a> FromArg<'a> for $t {
                fn from_arg(value: &'a str) -> Option<Self> {
                    value.parse::<$t>().ok()
                }
            }
        )*
    };
}

from_str_impl!(i8, i16, i32, i64, i128, isize);
from_str_impl!(u8, u16, u32, u64, u128, usize);
from_str_impl!(f32, f64, char);
from_str_impl!(PathBuf, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl<'a> FromArg<'a> for OsString {
    fn from_arg(value: &'a str) -> Option<Self> {
        Some(OsString::from(value))
    }
}

/// Lenient wraps any FromStr type, and parses it the way C++ stream
/// extraction does: leading whitespace is skipped, and then the longest prefix
/// of the first word which parses successfully is used. Trailing garbage is
/// ignored, so e.g. "42.42" is a valid Lenient<i32> with the value 42.
///
/// The built-in numeric conversions are strict; this wrapper is opt-in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Lenient<T>(pub T);

impl<T> Lenient<T> {
    /// Unwrap the parsed value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Parse the longest prefix of the first word of `value` as a T.
pub fn parse_prefix<T: FromStr>(value: &str) -> Option<T> {
    let word = value.split_whitespace().next()?;
    word.char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .rev()
        .find_map(|end| word[..end].parse::<T>().ok())
}

impl<'a, T: FromStr> FromArg<'a> for Lenient<T> {
    fn from_arg(value: &'a str) -> Option<Self> {
        parse_prefix(value).map(Lenient)
    }
}

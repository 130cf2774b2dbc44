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

use thiserror::Error;

/// Error represents the few things which can actually go wrong in this crate.
/// Note that parsing itself never fails, and neither do lookups: a missing or
/// malformed value is just `None`. Errors only show up once a caller asks a
/// `Validator` to enforce its schema, or when writing help text fails.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error, generally encountered when writing help text.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// One or more declared options were missing or could not be parsed as
    /// the requested type.
    #[error("Invalid or missing flags: {}", .0.join(", "))]
    InvalidFlags(Vec<String>),
}

/// A Result type which uses argmap's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;

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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argmap is a small command-line argument parser. It doesn't need to know
//! anything about the program's flags up front: it splits the raw arguments
//! into options and positional arguments, and then lets the caller ask for
//! whatever values it wants, converted to whatever types it wants.
//!
//! ```
//! use argmap::Args;
//!
//! let argv = ["/tmp/a", "--count=5", "-v", "--", "--not-a-flag"];
//! let args = Args::new(&argv).alias("verbose", &["v"]);
//!
//! assert_eq!(Some(5), args.get::<u32>("count"));
//! assert!(args.get_or("verbose", false));
//! assert_eq!(Some("/tmp/a"), args.get::<&str>(0));
//! assert_eq!(&["--not-a-flag"], args.skipped());
//! ```

/// alias provides a registry of alternate option names.
pub mod alias;
/// args provides the main entrypoint, `Args`, and its typed accessors.
pub mod args;
/// error defines error types specific to argmap.
pub mod error;
mod help;
/// main_impl contains the bits of this library which interact with the
/// process itself: its arguments, and exiting it.
pub mod main_impl;
/// parser splits raw argument tokens into options and positional arguments.
pub mod parser;
/// testing provides utilities which are useful for unit testing code which
/// uses this library.
#[cfg(feature = "testing")]
pub mod testing;
/// validate provides schema declaration, validation and help text.
pub mod validate;
/// value defines how raw argument strings are converted into typed values.
pub mod value;

#[cfg(feature = "testing")]
#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::alias::Aliases;
pub use self::args::{Args, Lookup};
pub use self::error::{Error, Result};
pub use self::main_impl::{program_name, program_parameters, EXIT_FAILURE, EXIT_SUCCESS};
pub use self::parser::{Options, OptionsBuilder, Parser};
pub use self::validate::{Entry, Validator};
pub use self::value::{FromArg, Lenient, FALSITIES};

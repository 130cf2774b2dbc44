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

use crate::alias::Aliases;
use crate::parser::{OptionMap, Options, Parser};
use crate::validate::Validator;
use crate::value::{coerce, FromArg};
use std::ops::ControlFlow;

/// Lookup is implemented by the things `Args` can be queried with: option
/// names (`&str`), which go through alias resolution, and positional argument
/// indices (`usize`).
pub trait Lookup {
    /// Returns the first value for this key which `convert` accepts. For
    /// option names, each name in the alias priority order is tried in turn,
    /// using the first value given for that name.
    fn first<'a, T, F>(&self, args: &Args<'a>, convert: F) -> Option<T>
    where
        F: FnMut(Option<&'a str>) -> Option<T>;

    /// Returns every raw value stored for this key, in order. Returns an empty
    /// list if the key is not present.
    fn all<'a>(&self, args: &Args<'a>) -> Vec<Option<&'a str>>;
}

impl Lookup for &str {
    fn first<'a, T, F>(&self, args: &Args<'a>, mut convert: F) -> Option<T>
    where
        F: FnMut(Option<&'a str>) -> Option<T>,
    {
        args.aliases.for_each_in_priority_order(self, |candidate| {
            match args
                .parser
                .values(candidate)
                .and_then(|vs| vs.first())
                .and_then(|v| convert(*v))
            {
                None => ControlFlow::Continue(()),
                Some(v) => ControlFlow::Break(v),
            }
        })
    }

    fn all<'a>(&self, args: &Args<'a>) -> Vec<Option<&'a str>> {
        args.aliases
            .priority_order(self)
            .find_map(|candidate| args.parser.values(candidate))
            .map(|vs| vs.to_vec())
            .unwrap_or_default()
    }
}

impl Lookup for &String {
    fn first<'a, T, F>(&self, args: &Args<'a>, convert: F) -> Option<T>
    where
        F: FnMut(Option<&'a str>) -> Option<T>,
    {
        self.as_str().first(args, convert)
    }

    fn all<'a>(&self, args: &Args<'a>) -> Vec<Option<&'a str>> {
        self.as_str().all(args)
    }
}

impl Lookup for usize {
    fn first<'a, T, F>(&self, args: &Args<'a>, mut convert: F) -> Option<T>
    where
        F: FnMut(Option<&'a str>) -> Option<T>,
    {
        args.positional()
            .get(*self)
            .and_then(|v| convert(Some(*v)))
    }

    fn all<'a>(&self, args: &Args<'a>) -> Vec<Option<&'a str>> {
        args.positional()
            .get(*self)
            .map(|v| vec![Some(*v)])
            .unwrap_or_default()
    }
}

/// Args is the main entrypoint to this library. It parses a list of argument
/// tokens once, and then allows the caller to query option values and
/// positional arguments, converted to whatever type the caller wants.
///
/// Nothing is ever an error at this level: if an option is missing, or if its
/// value can't be converted to the requested type, the result is simply None.
/// Use `Args::validate` to enforce a schema.
///
/// ```
/// use argmap::Args;
///
/// let argv = ["input.txt", "--count=5", "--laugh"];
/// let args = Args::new(&argv);
/// assert_eq!(Some(5), args.get::<i32>("count"));
/// assert!(args.get_or("laugh", false));
/// assert_eq!(&["input.txt"], args.positional());
/// ```
#[derive(Clone, Debug)]
pub struct Args<'a> {
    parser: Parser<'a>,
    aliases: Aliases,
}

impl<'a> Args<'a> {
    /// Parse the given argument tokens (which should not include the program
    /// name) using the default parser Options.
    pub fn new<S: AsRef<str>>(args: &'a [S]) -> Self {
        Self::with_options(args, &Options::default())
    }

    /// Parse the given argument tokens using the given parser Options.
    pub fn with_options<S: AsRef<str>>(args: &'a [S], options: &Options) -> Self {
        Args {
            parser: Parser::with_options(args, options),
            aliases: Aliases::new(),
        }
    }

    /// Register aliases for the given primary option name, builder-style.
    /// Lookups of `primary` will fall back to each alias, in order.
    pub fn alias(mut self, primary: &str, aliases: &[&str]) -> Self {
        self.add_alias(primary, aliases);
        self
    }

    /// Register aliases for the given primary option name.
    pub fn add_alias(&mut self, primary: &str, aliases: &[&str]) -> &mut Self {
        self.aliases.add(primary, aliases);
        self
    }

    /// Returns the alias registry.
    pub fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Returns the underlying parsed options.
    pub fn options(&self) -> &OptionMap<'a> {
        self.parser.options()
    }

    /// Returns the positional arguments, in the order they were given.
    pub fn positional(&self) -> &[&'a str] {
        self.parser.positional()
    }

    /// Returns every argument after the "--" separator, verbatim.
    pub fn skipped(&self) -> &[&'a str] {
        self.parser.skipped()
    }

    /// Returns true if the given option (or any of its aliases), or the
    /// positional argument with the given index, was specified at all.
    pub fn contains<K: Lookup>(&self, key: K) -> bool {
        !key.all(self).is_empty()
    }

    /// Returns the value of the given option (or positional argument)
    /// converted to T, or None if it wasn't specified or can't be converted.
    pub fn get<T: FromArg<'a>>(&self, key: impl Lookup) -> Option<T> {
        key.first(self, coerce::<T>)
    }

    /// Like `get`, but returns the given default value instead of None.
    pub fn get_or<T: FromArg<'a>>(&self, key: impl Lookup, default_value: T) -> T {
        self.get(key).unwrap_or(default_value)
    }

    /// Like `get`, but converts values using the given function instead of
    /// T's FromArg implementation. A bare flag never has a value here.
    pub fn get_with<T, F>(&self, key: impl Lookup, mut parse: F) -> Option<T>
    where
        F: FnMut(&'a str) -> Option<T>,
    {
        key.first(self, |v| v.and_then(|v| parse(v)))
    }

    /// Returns every value of the given option, each converted to T. Values
    /// which can't be converted are None. If the option wasn't specified at
    /// all, the list is empty.
    pub fn get_multiple<T: FromArg<'a>>(&self, key: impl Lookup) -> Vec<Option<T>> {
        key.all(self).into_iter().map(coerce::<T>).collect()
    }

    /// Like `get_multiple`, but values which can't be converted are replaced
    /// with the given default.
    pub fn get_multiple_or<T: FromArg<'a> + Clone>(
        &self,
        key: impl Lookup,
        default_value: T,
    ) -> Vec<T> {
        self.get_multiple(key)
            .into_iter()
            .map(|v| v.unwrap_or_else(|| default_value.clone()))
            .collect()
    }

    /// Start declaring a schema for this program's options, for validation
    /// and help text. Any aliases declared through the returned Validator are
    /// registered on this Args.
    pub fn validate<'v>(&'v mut self, program: &str, description: &str) -> Validator<'v, 'a> {
        Validator::new(self, program, description)
    }
}

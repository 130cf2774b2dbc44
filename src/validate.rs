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

use crate::args::Args;
use crate::error::*;
use crate::help;
use crate::main_impl;
use crate::value::FromArg;
use log::debug;
use std::io::Write;

/// Entry is a single declared option in a Validator's schema, along with the
/// verdict on whether the parsed arguments satisfy it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    name: String,
    description: String,
    required: bool,
    valid: bool,
}

impl Entry {
    /// Returns this option's (primary) name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human-readable description of this option.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns true if this option must be specified.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns true if the parsed arguments satisfied this entry at the time
    /// it was declared.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validator checks parsed arguments against a declared schema, and renders
/// help text describing that schema.
///
/// Each entry is checked as soon as it is declared, against the arguments
/// which were already fully parsed. So, the order entries are declared in
/// does not matter for their verdicts.
///
/// Nothing here terminates the process, except `print_and_exit_on_failure`.
#[derive(Debug)]
pub struct Validator<'v, 'a> {
    args: &'v mut Args<'a>,
    program: String,
    description: String,
    entries: Vec<Entry>,
}

impl<'v, 'a> Validator<'v, 'a> {
    pub(crate) fn new(args: &'v mut Args<'a>, program: &str, description: &str) -> Self {
        Validator {
            args: args,
            program: program.to_owned(),
            description: description.to_owned(),
            entries: Vec::new(),
        }
    }

    fn declare(&mut self, option: &str, description: &str, required: bool, valid: bool) {
        debug!(
            "Declared {} option '{}': {}",
            if required { "required" } else { "optional" },
            option,
            if valid { "valid" } else { "invalid" }
        );
        self.entries.push(Entry {
            name: option.to_owned(),
            description: description.to_owned(),
            required: required,
            valid: valid,
        });
    }

    /// Declare a required option. It is valid if a value of type T can be
    /// retrieved for it, either by its own name or through one of the given
    /// aliases (which are registered on the underlying Args).
    pub fn require<T: FromArg<'a>>(
        &mut self,
        option: &str,
        description: &str,
        aliases: &[&str],
    ) -> &mut Self {
        self.args.add_alias(option, aliases);
        let valid = self.args.get::<T>(option).is_some();
        self.declare(option, description, true, valid);
        self
    }

    /// Declare an optional option. It is valid if it wasn't specified at all,
    /// or if a value of type T can be retrieved for it.
    pub fn optional<T: FromArg<'a>>(
        &mut self,
        option: &str,
        description: &str,
        aliases: &[&str],
    ) -> &mut Self {
        self.args.add_alias(option, aliases);
        let valid = !self.args.contains(option) || self.args.get::<T>(option).is_some();
        self.declare(option, description, false, valid);
        self
    }

    /// Returns the entries declared so far, in declaration order.
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    /// Returns true if every declared entry is valid.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| e.is_valid())
    }

    /// Returns the names of the declared entries which are not valid.
    pub fn invalid_options(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.is_valid())
            .map(|e| e.name())
            .collect()
    }

    /// Returns an error naming every invalid entry, if there are any. This is
    /// the non-terminating alternative to `print_and_exit_on_failure`.
    pub fn check(&self) -> Result<()> {
        match self.is_valid() {
            true => Ok(()),
            false => Err(Error::InvalidFlags(
                self.invalid_options()
                    .into_iter()
                    .map(|n| n.to_owned())
                    .collect(),
            )),
        }
    }

    /// Returns the program name given when this Validator was created.
    pub fn program(&self) -> &str {
        self.program.as_str()
    }

    /// Returns the program description given when this Validator was created.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Render this Validator's help text.
    pub fn help(&self) -> String {
        help::render(&self.program, &self.description, &self.entries)
    }

    /// Write this Validator's help text to the given writer.
    pub fn print_help<W: Write>(&self, f: &mut W) -> Result<()> {
        help::print_help(f, &self.program, &self.description, &self.entries)
    }

    /// If any declared entry is invalid, print help to stderr and exit the
    /// process with a failure exit code. Otherwise, this does nothing.
    ///
    /// Like `std::process::exit`, no destructors will run if this exits.
    pub fn print_and_exit_on_failure(&self) {
        main_impl::exit_on_failure(self)
    }
}

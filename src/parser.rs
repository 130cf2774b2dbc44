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

use log::{debug, trace};
use std::collections::HashMap;

/// The token which, if the separator is enabled, ends option parsing.
pub const SEPARATOR: &str = "--";
/// The default character which separates a packed value from its key, as in
/// "--key=value".
pub const DEFAULT_VALUE_DELIMITER: char = '=';

/// The option map: every key (leading dashes stripped) maps to the values it
/// was given, in the order they were encountered. A `None` value means the key
/// appeared without any value (a bare flag).
pub type OptionMap<'a> = HashMap<&'a str, Vec<Option<&'a str>>>;

/// Options controls the few knobs the parser has. Generally these should be
/// constructed using OptionsBuilder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// Whether or not a literal "--" token ends option parsing. All tokens
    /// after it are kept verbatim in `Parser::skipped`.
    pub separator: bool,
    /// The character which splits a packed "--key=value" token.
    pub value_delimiter: char,
}

impl Default for Options {
    fn default() -> Self {
        OptionsBuilder::new().build()
    }
}

/// OptionsBuilder provides a builder-style interface to construct an Options.
#[derive(Clone, Debug, Default)]
pub struct OptionsBuilder {
    separator: Option<bool>,
    value_delimiter: Option<char>,
}

impl OptionsBuilder {
    /// Construct a new OptionsBuilder, which by default just sets the options
    /// to their default values.
    pub fn new() -> Self {
        OptionsBuilder {
            separator: None,
            value_delimiter: None,
        }
    }

    /// Set whether a literal "--" stops option parsing. This is enabled by
    /// default. When disabled, "--" is just an option with an empty name.
    pub fn set_separator(mut self, separator: bool) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set the character which separates a key from a packed value.
    pub fn set_value_delimiter(mut self, value_delimiter: char) -> Self {
        self.value_delimiter = Some(value_delimiter);
        self
    }

    /// Build an Options structure from this builder's current state.
    pub fn build(self) -> Options {
        Options {
            separator: self.separator.unwrap_or(true),
            value_delimiter: self.value_delimiter.unwrap_or(DEFAULT_VALUE_DELIMITER),
        }
    }
}

/// Parser non-destructively splits a list of argument tokens into options,
/// positional arguments, and skipped arguments. It borrows the tokens, so the
/// argument storage must outlive it.
///
/// The rules are simple, and there is no schema:
///
/// - A token starting with a "-" is an option. All leading dashes are removed
///   to get its key. If the key contains the value delimiter, the rest of the
///   token is that option's value.
/// - Any other token (including an empty one) is a value for the preceding
///   option, or a positional argument if there is no such option.
/// - An option with no value following it is recorded as a bare flag.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    options: OptionMap<'a>,
    positional: Vec<&'a str>,
    skipped: Vec<&'a str>,
}

/// The state machine driving Parser. The only state carried between tokens is
/// the option (if any) still waiting for a value.
struct State<'o, 'a> {
    config: &'o Options,
    current_option: Option<&'a str>,
    options: OptionMap<'a>,
    positional: Vec<&'a str>,
}

impl<'o, 'a> State<'o, 'a> {
    fn new(config: &'o Options) -> Self {
        State {
            config: config,
            current_option: None,
            options: HashMap::new(),
            positional: Vec::new(),
        }
    }

    /// Advance the state machine for the given token.
    fn churn(&mut self, token: &'a str) {
        if token.starts_with('-') {
            self.on_option(token);
        } else {
            self.on_value(token);
        }
    }

    /// Consumes the current option as a bare flag, if there is one.
    fn flush(&mut self) {
        if let Some(key) = self.current_option.take() {
            trace!("Option '{}' has no value", key);
            self.options.entry(key).or_insert_with(Vec::new).push(None);
        }
    }

    fn on_option(&mut self, token: &'a str) {
        self.flush();
        let key = token.trim_start_matches('-');

        // Handle a packed argument (--key=value).
        match key.find(self.config.value_delimiter) {
            None => {
                trace!("Option '{}' awaiting value", key);
                self.current_option = Some(key);
            }
            Some(idx) => {
                self.current_option = Some(&key[..idx]);
                self.on_value(&key[idx + self.config.value_delimiter.len_utf8()..]);
            }
        }
    }

    fn on_value(&mut self, value: &'a str) {
        match self.current_option.take() {
            None => {
                trace!("Positional argument '{}'", value);
                self.positional.push(value);
            }
            Some(key) => {
                trace!("Option '{}' = '{}'", key, value);
                self.options
                    .entry(key)
                    .or_insert_with(Vec::new)
                    .push(Some(value));
            }
        }
    }
}

impl<'a> Parser<'a> {
    /// Parse the given tokens with the default Options. The tokens should not
    /// include the program name (i.e., argv[0]).
    pub fn new<S: AsRef<str>>(args: &'a [S]) -> Self {
        Self::with_options(args, &Options::default())
    }

    /// Parse the given tokens with the given Options. This never fails; any
    /// list of tokens produces some set of options and positional arguments.
    pub fn with_options<S: AsRef<str>>(args: &'a [S], options: &Options) -> Self {
        let mut state = State::new(options);
        let mut tokens = args.iter().map(|t| t.as_ref());
        let mut skipped: Vec<&'a str> = Vec::new();

        while let Some(token) = tokens.next() {
            if options.separator && token == SEPARATOR {
                skipped.extend(tokens.by_ref());
                debug!(
                    "Stopped parsing options at '{}', skipping {} arguments",
                    SEPARATOR,
                    skipped.len()
                );
                break;
            }
            state.churn(token);
        }
        // If the last token was an option, it needs to be drained.
        state.flush();

        debug!(
            "Parsed {} arguments into {} options, {} positional arguments",
            args.len(),
            state.options.len(),
            state.positional.len()
        );

        Parser {
            options: state.options,
            positional: state.positional,
            skipped: skipped,
        }
    }

    /// Returns the full map of parsed options.
    pub fn options(&self) -> &OptionMap<'a> {
        &self.options
    }

    /// Returns all of the values given for the option with the given key, or
    /// None if it was not specified at all. If it was, the returned slice is
    /// never empty.
    pub fn values(&self, key: &str) -> Option<&[Option<&'a str>]> {
        self.options.get(key).map(|vs| vs.as_slice())
    }

    /// Returns true if the given key appeared at least once.
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Returns the positional arguments, in the order they were given.
    pub fn positional(&self) -> &[&'a str] {
        self.positional.as_slice()
    }

    /// Returns every argument after the "--" separator, verbatim.
    pub fn skipped(&self) -> &[&'a str] {
        self.skipped.as_slice()
    }
}

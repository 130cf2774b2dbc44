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

use log::{debug, warn};
use std::collections::HashMap;
use std::ops::ControlFlow;

/// Aliases maps alternate option names onto a primary name. Each primary has
/// a group of names, which always starts with the primary itself, followed by
/// its aliases in the order they were added. Each alias belongs to exactly one
/// primary.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Aliases {
    groups: HashMap<String, Vec<String>>,
    primaries: HashMap<String, String>,
}

impl Aliases {
    /// Construct a new, empty alias registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the given aliases for `primary`. Adding aliases to a primary
    /// which already has some appends to its group. An alias previously
    /// registered for some *other* primary is moved to this one.
    pub fn add(&mut self, primary: &str, aliases: &[&str]) -> &mut Self {
        for &alias in aliases {
            if alias == primary {
                continue;
            }

            match self.primaries.get(alias) {
                Some(existing) if existing == primary => continue,
                Some(existing) => {
                    warn!(
                        "Alias '{}' moved from '{}' to '{}'",
                        alias, existing, primary
                    );
                    if let Some(group) = self.groups.get_mut(existing) {
                        group.retain(|name| name != alias);
                    }
                }
                None => {}
            }

            debug!("Registered alias '{}' for '{}'", alias, primary);
            self.primaries.insert(alias.to_owned(), primary.to_owned());
            self.group_mut(primary).push(alias.to_owned());
        }
        self
    }

    fn group_mut(&mut self, primary: &str) -> &mut Vec<String> {
        self.groups
            .entry(primary.to_owned())
            .or_insert_with(|| vec![primary.to_owned()])
    }

    /// Returns the primary name the given alias belongs to, or None if `name`
    /// is not a registered alias.
    pub fn resolve_primary(&self, name: &str) -> Option<&str> {
        self.primaries.get(name).map(|p| p.as_str())
    }

    /// Returns the full group for the given primary (the primary itself, then
    /// its aliases), or None if it has no aliases.
    pub fn group(&self, primary: &str) -> Option<&[String]> {
        self.groups.get(primary).map(|g| g.as_slice())
    }

    /// Returns the names which should be tried, in order, when looking up
    /// `key`: first `key` itself, and then (if `key` is a primary) each of its
    /// aliases in the order they were added.
    pub fn priority_order<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s str> + 's {
        let aliases = self
            .groups
            .get(key)
            .map(|g| &g[1..])
            .unwrap_or(&[])
            .iter()
            .map(|a| a.as_str());
        std::iter::once(key).chain(aliases)
    }

    /// Call `visitor` with each name in `priority_order(key)`, stopping at the
    /// first one which breaks. Returns the value it broke with, if any.
    pub fn for_each_in_priority_order<B, F>(&self, key: &str, mut visitor: F) -> Option<B>
    where
        F: FnMut(&str) -> ControlFlow<B>,
    {
        for candidate in self.priority_order(key) {
            if let ControlFlow::Break(b) = visitor(candidate) {
                return Some(b);
            }
        }
        None
    }
}

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

use crate::alias::*;
use crate::testing::logging::{logged_messages, set_test_logger};
use std::ops::ControlFlow;

#[test]
fn test_groups_keep_declared_order() {
    set_test_logger(None);
    let mut aliases = Aliases::new();
    aliases.add("verbose", &["v", "loud"]);
    aliases.add("verbose", &["V"]);

    let expected: Vec<String> = vec!["verbose", "v", "loud", "V"]
        .into_iter()
        .map(|s| s.to_owned())
        .collect();
    assert_eq!(Some(expected.as_slice()), aliases.group("verbose"));
    assert_eq!(None, aliases.group("v"));
}

#[test]
fn test_resolve_primary() {
    set_test_logger(None);
    let mut aliases = Aliases::new();
    aliases.add("verbose", &["v"]).add("count", &["c", "n"]);

    assert_eq!(Some("verbose"), aliases.resolve_primary("v"));
    assert_eq!(Some("count"), aliases.resolve_primary("c"));
    assert_eq!(Some("count"), aliases.resolve_primary("n"));
    assert_eq!(None, aliases.resolve_primary("verbose"));
    assert_eq!(None, aliases.resolve_primary("x"));
}

#[test]
fn test_priority_order() {
    set_test_logger(None);
    let mut aliases = Aliases::new();
    aliases.add("count", &["c", "n"]);

    assert_eq!(
        vec!["count", "c", "n"],
        aliases.priority_order("count").collect::<Vec<_>>()
    );
    // Aliases don't fall back to their primary.
    assert_eq!(vec!["c"], aliases.priority_order("c").collect::<Vec<_>>());
    assert_eq!(
        vec!["unknown"],
        aliases.priority_order("unknown").collect::<Vec<_>>()
    );
}

#[test]
fn test_for_each_in_priority_order_stops_early() {
    set_test_logger(None);
    let mut aliases = Aliases::new();
    aliases.add("count", &["c", "n"]);

    let mut visited: Vec<String> = vec![];
    let found = aliases.for_each_in_priority_order("count", |candidate| {
        visited.push(candidate.to_owned());
        match candidate {
            "c" => ControlFlow::Break(candidate.len()),
            _ => ControlFlow::Continue(()),
        }
    });
    assert_eq!(Some(1), found);
    assert_eq!(vec!["count".to_owned(), "c".to_owned()], visited);

    let found: Option<()> =
        aliases.for_each_in_priority_order("count", |_| ControlFlow::Continue(()));
    assert_eq!(None, found);
}

#[test]
fn test_alias_moves_between_primaries() {
    set_test_logger(None);
    let mut aliases = Aliases::new();
    aliases.add("first", &["shared", "a"]);
    aliases.add("second", &["shared"]);

    assert_eq!(Some("second"), aliases.resolve_primary("shared"));
    assert_eq!(
        vec!["first", "a"],
        aliases.priority_order("first").collect::<Vec<_>>()
    );
    assert_eq!(
        vec!["second", "shared"],
        aliases.priority_order("second").collect::<Vec<_>>()
    );
    assert!(logged_messages()
        .iter()
        .any(|m| m.contains("Alias 'shared' moved from 'first' to 'second'")));
}

#[test]
fn test_duplicate_and_self_aliases_are_ignored() {
    set_test_logger(None);
    let mut aliases = Aliases::new();
    aliases.add("verbose", &["verbose", "v", "v"]);
    aliases.add("verbose", &["v"]);

    assert_eq!(
        vec!["verbose", "v"],
        aliases.priority_order("verbose").collect::<Vec<_>>()
    );
    assert_eq!(None, aliases.resolve_primary("verbose"));
}

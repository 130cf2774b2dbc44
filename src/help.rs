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

use crate::error::*;
use crate::validate::Entry;
use std::io::Write;

fn usage_item(entry: &Entry) -> String {
    match entry.is_required() {
        true => format!("--{}=arg", entry.name()),
        false => format!("[{}]", entry.name()),
    }
}

/// Render the full help text for a program with the given schema entries:
///
/// ```text
/// Usage: program --required=arg [optional]
///
/// description
///
/// --required  help for required
/// --optional  help for optional
/// ```
///
/// The option name column is one character wider than the longest name.
pub(crate) fn render(program: &str, description: &str, entries: &[Entry]) -> String {
    let mut help = format!("Usage: {}", program);
    for entry in entries {
        help.push(' ');
        help.push_str(&usage_item(entry));
    }
    help.push_str(&format!("\n\n{}\n", description));

    if entries.is_empty() {
        return help;
    }

    let width = entries
        .iter()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(0)
        + 1;
    help.push('\n');
    for entry in entries {
        help.push_str(&format!(
            "--{:<width$} {}\n",
            entry.name(),
            entry.description(),
            width = width
        ));
    }
    help
}

pub(crate) fn print_help<W: Write>(
    f: &mut W,
    program: &str,
    description: &str,
    entries: &[Entry],
) -> Result<()> {
    f.write_all(render(program, description, entries).as_bytes())?;
    f.flush()?;
    Ok(())
}

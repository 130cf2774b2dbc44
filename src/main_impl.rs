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

use crate::validate::Validator;
use log::error;
use std::env;
use std::process;

/// The integer which is returned from main() if the program exits successfully.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits because its
/// arguments were invalid.
pub const EXIT_FAILURE: i32 = 1;

/// Returns the current program's parameters (accessed essentialy via
/// `std::env::args`) collected into a Vec. The 0'th parameter (the executable)
/// is omitted.
pub fn program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

/// Returns the name this program was invoked with, or an empty string if the
/// platform didn't give us one.
pub fn program_name() -> String {
    env::args().next().unwrap_or_default()
}

/// Returns the exit code the process should terminate with given this
/// Validator's verdicts, or None if it should keep going.
pub(crate) fn failure_exit_code(validator: &Validator) -> Option<i32> {
    match validator.is_valid() {
        true => None,
        false => Some(EXIT_FAILURE),
    }
}

/// Print help and exit the process, if the given Validator has any invalid
/// entries.
pub(crate) fn exit_on_failure(validator: &Validator) {
    if let Some(code) = failure_exit_code(validator) {
        error!(
            "Invalid or missing flags: {}",
            validator.invalid_options().join(", ")
        );
        if let Err(e) = validator.print_help(&mut std::io::stderr()) {
            error!("Failed to print help: {}", e);
        }
        process::exit(code);
    }
}

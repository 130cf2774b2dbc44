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
use log::{set_logger, set_max_level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

static TEST_LOGGER: TestLogger = TestLogger;
static INIT: Once = Once::new();

lazy_static! {
    static ref MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let message = format!("{} {} {}", record.level(), record.target(), record.args());
        println!("{}", message);
        if let Ok(mut messages) = MESSAGES.lock() {
            messages.push(message);
        }
    }

    fn flush(&self) {}
}

/// Call set_logger with a test-friendly logger, which prints every record to
/// stdout and remembers it. Logging will be enabled at the given level, or at
/// "Debug" if no other level was specified. Only the first call installs the
/// logger; later calls just adjust the level.
pub fn set_test_logger(max_log_level: Option<LevelFilter>) {
    INIT.call_once(|| {
        // Some other logger may already be installed, in which case it wins.
        let _ = set_logger(&TEST_LOGGER);
    });
    set_max_level(max_log_level.unwrap_or(LevelFilter::Debug));
}

/// Returns every message the test logger has recorded so far, formatted as
/// "LEVEL target message". Tests run concurrently, so this may contain
/// messages from other tests too.
pub fn logged_messages() -> Vec<String> {
    MESSAGES.lock().map(|m| m.clone()).unwrap_or_default()
}

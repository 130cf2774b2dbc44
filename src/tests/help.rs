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
use crate::testing::logging::set_test_logger;

#[test]
fn test_help_golden_output() {
    set_test_logger(None);
    let argv = ["--count=5"];
    let mut args = Args::new(&argv);
    let mut validator = args.validate("counter", "Counts things, and maybe laughs.");
    validator
        .require::<i32>("count", "How many things to count", &["c"])
        .optional::<bool>("laugh", "Whether to laugh afterwards", &[])
        .optional::<String>("o", "Where to write output", &[]);

    assert_eq!(
        "Usage: counter --count=arg [laugh] [o]\n\
         \n\
         Counts things, and maybe laughs.\n\
         \n\
         --count  How many things to count\n\
         --laugh  Whether to laugh afterwards\n\
         --o      Where to write output\n",
        validator.help()
    );
}

#[test]
fn test_help_without_entries() {
    set_test_logger(None);
    let argv: [&str; 0] = [];
    let mut args = Args::new(&argv);
    let validator = args.validate("bare", "Takes no flags.");
    assert_eq!("Usage: bare\n\nTakes no flags.\n", validator.help());
}

#[test]
fn test_print_help_matches_help() {
    set_test_logger(None);
    let argv: [&str; 0] = [];
    let mut args = Args::new(&argv);
    let mut validator = args.validate("prog", "desc");
    validator.require::<u16>("port", "Port to listen on", &[]);

    let mut out: Vec<u8> = Vec::new();
    validator.print_help(&mut out).unwrap();
    assert_eq!(validator.help(), String::from_utf8(out).unwrap());
    assert_eq!(
        "Usage: prog --port=arg\n\ndesc\n\n--port  Port to listen on\n",
        validator.help()
    );
}

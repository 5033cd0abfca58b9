// Copyright 2025 gabadi
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use mcp_hub_tui::config::LauncherConfig;
use mcp_hub_tui::error::{LauncherError, format_error_with_color, get_exit_code, should_use_color};
use mcp_hub_tui::launcher::Launcher;
use mcp_hub_tui::logging;
use std::env;
use std::ffi::OsString;
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let config = match LauncherConfig::from_env() {
        Ok(config) => config,
        Err(e) => return report(&e, false),
    };

    logging::setup_logger(config.verbose);

    // Everything after argv[0] belongs to the dispatched binary.
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match Launcher::from_config(&config).run(&args) {
        Ok(code) => code,
        Err(e) => report(&e, config.no_color),
    }
}

fn report(error: &LauncherError, no_color: bool) -> i32 {
    eprint!(
        "{}",
        format_error_with_color(error, should_use_color(no_color))
    );
    get_exit_code(error)
}

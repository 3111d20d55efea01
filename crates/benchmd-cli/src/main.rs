// Dweve BenchMD - Benchmark Log to Markdown Reporter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! benchmd Command Line Interface

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use benchmd_cli::error::CliError;
use benchmd_cli::report::{run, ReportKind};
use clap::Parser;

/// benchmd - transform Go benchmark output into a markdown table
///
/// # Examples
///
/// ```bash
/// # Report from a saved benchmark log
/// benchmd -t boxing bench.out
///
/// # Pipe `go test -bench` output straight through
/// go test -bench . | benchmd --type buildtime
/// ```
#[derive(Parser)]
#[command(name = "benchmd")]
#[command(author, version, about = "Transform Go benchmark output into a markdown table", long_about = None)]
struct Cli {
    /// Type of benchmark input
    #[arg(short = 't', long = "type", value_enum, default_value = "boxing")]
    report_type: ReportKind,

    /// Do not echo stdin to stdout
    #[arg(long = "no-echo")]
    no_echo: bool,

    /// Path to an input file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn try_main(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.file {
        // File input never echoes, regardless of --no-echo.
        Some(path) => {
            let file = File::open(&path).map_err(|e| CliError::io_error(path.as_path(), e))?;
            run(cli.report_type, BufReader::new(file), false, &mut out)
        }
        None => run(cli.report_type, io::stdin().lock(), !cli.no_echo, &mut out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

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

//! The pipeline driver: read lines, aggregate, render.
//!
//! The report kind is selected once, here; each kind dispatches to a
//! self-contained collect-then-render pass instead of re-checking the mode
//! per line. Input is fully consumed before any report output is written,
//! so echoed lines always precede the table — and precede any fatal
//! classification error.

use std::io::{BufRead, Write};

use benchmd_core::{match_line, render, BoxingTable, ComparisonTable, FileType, ListType, TypeCount};
use clap::ValueEnum;

use crate::error::CliError;

/// Which of the three fixed reports to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Boxing-overhead comparison: per-list-type averages.
    #[value(name = "boxing")]
    Boxing,
    /// Build-time comparison: typed vs generic per artifact and type count.
    #[value(name = "buildtime")]
    BuildTime,
    /// File-size comparison: typed vs generic artifact sizes.
    #[value(name = "filesize")]
    FileSize,
}

/// Run the full pipeline for one report kind.
///
/// Reads `input` to exhaustion, echoing each line to `out` first when
/// `echo` is set, then renders the selected report to `out`.
///
/// # Errors
///
/// Returns an error when a matched benchmark name cannot be classified
/// (fatal, no report is written) or when reading or writing fails.
pub fn run<R: BufRead, W: Write>(
    kind: ReportKind,
    input: R,
    echo: bool,
    out: &mut W,
) -> Result<(), CliError> {
    match kind {
        ReportKind::Boxing => {
            let table = collect_boxing(input, echo, out)?;
            render::boxing_report(&table, out).map_err(CliError::stream)
        }
        ReportKind::BuildTime => {
            let table = collect_comparison(input, echo, out)?;
            render::build_time_report(&table, out).map_err(CliError::stream)
        }
        ReportKind::FileSize => {
            let table = collect_comparison(input, echo, out)?;
            render::file_size_report(&table, out).map_err(CliError::stream)
        }
    }
}

fn collect_boxing<R: BufRead, W: Write>(
    input: R,
    echo: bool,
    out: &mut W,
) -> Result<BoxingTable, CliError> {
    let mut table = BoxingTable::new();
    for line in input.lines() {
        let line = line.map_err(CliError::stream)?;
        if echo {
            writeln!(out, "{line}").map_err(CliError::stream)?;
        }
        let Some(rec) = match_line(&line) else {
            continue;
        };
        let list_type = ListType::classify(&rec.name)?;
        table.push(list_type, rec);
    }
    Ok(table)
}

fn collect_comparison<R: BufRead, W: Write>(
    input: R,
    echo: bool,
    out: &mut W,
) -> Result<ComparisonTable, CliError> {
    let mut table = ComparisonTable::new();
    for line in input.lines() {
        let line = line.map_err(CliError::stream)?;
        if echo {
            writeln!(out, "{line}").map_err(CliError::stream)?;
        }
        let Some(rec) = match_line(&line) else {
            continue;
        };
        let list_type = ListType::classify(&rec.name)?;
        let file_type = FileType::classify(&rec.name)?;
        let type_count = TypeCount::classify(&rec.name)?;
        table.insert(list_type, file_type, type_count, &rec);
    }
    Ok(table)
}

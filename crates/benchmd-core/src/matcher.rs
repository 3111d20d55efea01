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

//! Benchmark-result line recognition.
//!
//! A benchmark-result line as produced by `go test -bench` looks like:
//!
//! ```text
//! BenchmarkList/boxed-8    26224882    45.71 ns/op    23 B/op    1 allocs/op
//! ```
//!
//! The name token starts with `Benchmark` and ends in a `-<threads>`
//! suffix; the numeric fields are the operation count, nanoseconds per
//! operation, bytes per operation (`B/op`, or `filesize/op` for the
//! file-size report) and an optional allocations-per-operation count.
//! Anything else (summary lines, `PASS`, `ok ...`) is not a benchmark
//! result and is skipped.

use once_cell::sync::Lazy;
use regex::Regex;

static BENCH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(Benchmark\S+-\d+)\s+(\d+)\s+([\d.]+) ns/op\s+([\d.]+) (?:B|filesize)/op(?:\s+([\d.]+) allocs/op)?",
    )
    .expect("benchmark line pattern is valid")
});

/// One matched benchmark-result line.
///
/// Immutable once parsed. Numeric fields are carried as `f64`; whether the
/// input wrote `5` or `5.0` only matters when a value is printed, and the
/// rounding rule in [`crate::round`] restores that distinction.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchLine {
    /// Full benchmark name including the `-<threads>` suffix.
    pub name: String,
    /// Operation count for the benchmark iteration.
    pub ops: f64,
    /// Nanoseconds per operation.
    pub ns_per_op: f64,
    /// Bytes per operation, or the raw file size in file-size input.
    pub bytes_per_op: f64,
    /// Heap allocations per operation. Only present in boxing input.
    pub allocs_per_op: Option<f64>,
}

/// Attempt to recognize a benchmark-result line.
///
/// Returns `None` for any line that does not match the pattern; such lines
/// are not an error, they are simply not benchmark results.
///
/// # Examples
///
/// ```
/// use benchmd_core::match_line;
///
/// let line = "BenchmarkList/typed-8    1000    12.5 ns/op    8 B/op";
/// let rec = match_line(line).unwrap();
/// assert_eq!(rec.name, "BenchmarkList/typed-8");
/// assert_eq!(rec.ops, 1000.0);
/// assert_eq!(rec.allocs_per_op, None);
///
/// assert!(match_line("PASS").is_none());
/// ```
pub fn match_line(line: &str) -> Option<BenchLine> {
    let caps = BENCH_LINE.captures(line)?;

    // The character classes admit degenerate tokens like "..." that do not
    // parse as numbers; treat those lines as non-matches.
    let ops: f64 = caps[2].parse().ok()?;
    let ns_per_op: f64 = caps[3].parse().ok()?;
    let bytes_per_op: f64 = caps[4].parse().ok()?;
    let allocs_per_op = match caps.get(5) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(BenchLine {
        name: caps[1].to_string(),
        ops,
        ns_per_op,
        bytes_per_op,
        allocs_per_op,
    })
}

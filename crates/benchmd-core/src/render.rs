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

//! Markdown report renderers.
//!
//! Each report prints a header row, an alignment separator row, then data
//! rows. The comparison reports are file-type-major: all `pkg` rows for
//! type counts 0 through 5, then all `bin` rows, with the artifact label
//! only on the first row of each group. Cells whose inputs are missing, and
//! percentages whose denominator is zero, render the `N/A` sentinel rather
//! than aborting the report.

use std::fmt;
use std::io::{self, Write};

use crate::classify::{FileType, ListType, TypeCount};
use crate::round::Rounded;
use crate::table::{BoxingTable, ComparisonTable};

/// A numeric cell that may be unavailable.
///
/// Missing data (no accumulated records, or a zero denominator in a
/// percentage) renders as `N/A`.
struct MetricCell(Option<f64>);

impl fmt::Display for MetricCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", Rounded(v)),
            None => f.write_str("N/A"),
        }
    }
}

/// Percentage increase from `typed` to `generic`, or `None` when the
/// typed denominator is zero.
fn pct_increase(typed: f64, generic: f64) -> Option<f64> {
    if typed == 0.0 {
        None
    } else {
        Some(-(((typed - generic) / typed) * 100.0))
    }
}

/// Render the boxing-overhead comparison.
///
/// One row per list type in the fixed order Boxed, Generic, Typed, each
/// carrying the arithmetic mean of the accumulated records. A list type
/// with no records renders `N/A` in every numeric cell.
pub fn boxing_report<W: Write>(table: &BoxingTable, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "| List type | Number of types | Operations | ns/op | Bytes/op | Allocs/op |"
    )?;
    writeln!(
        out,
        "|:---------:|:---------------:|:----------:|:-----:|:--------:|:---------:|"
    )?;

    for list_type in ListType::ALL {
        match table.averages(list_type) {
            Some(avg) => writeln!(
                out,
                "| {} | 1 | {} | {} | {} | {} |",
                list_type,
                Rounded(avg.ops),
                Rounded(avg.ns_per_op),
                Rounded(avg.bytes_per_op),
                Rounded(avg.allocs_per_op),
            )?,
            None => writeln!(out, "| {list_type} | 1 | N/A | N/A | N/A | N/A |")?,
        }
    }
    Ok(())
}

/// Render the build-time comparison.
///
/// Each row compares the stored typed and generic cells at one
/// (artifact, type count) key: the raw ops and ns/op values, the
/// generic-minus-typed delta, and the percentage increase relative to the
/// typed value. The boxed bucket and the empty-interface baseline are
/// accumulated but never rendered here.
pub fn build_time_report<W: Write>(table: &ComparisonTable, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "| Artifact type | Number of types | Ops - typed | Ops - generic | Increase (ops) | Increase (%) | ns/op - typed | ns/op - generic | Increase (ns/op) | Increase (%) |"
    )?;
    writeln!(
        out,
        "|:-------------:|:---------------:|:-----------:|:-------------:|:--------------:|:------------:|:-------------:|:---------------:|:----------------:|:------------:|"
    )?;

    for file_type in FileType::ALL {
        for (row, count) in TypeCount::RENDERED.iter().enumerate() {
            let label = if row == 0 { file_type.label() } else { "" };
            let typed = table.get(ListType::Typed, file_type, *count);
            let generic = table.get(ListType::Generic, file_type, *count);

            let (delta_ops, pct_ops, delta_ns, pct_ns) = match (typed, generic) {
                (Some(t), Some(g)) => (
                    Some(g.ops - t.ops),
                    pct_increase(t.ops, g.ops),
                    Some(g.ns_per_op - t.ns_per_op),
                    pct_increase(t.ns_per_op, g.ns_per_op),
                ),
                _ => (None, None, None, None),
            };

            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                label,
                count,
                MetricCell(typed.map(|c| c.ops)),
                MetricCell(generic.map(|c| c.ops)),
                MetricCell(delta_ops),
                MetricCell(pct_ops),
                MetricCell(typed.map(|c| c.ns_per_op)),
                MetricCell(generic.map(|c| c.ns_per_op)),
                MetricCell(delta_ns),
                MetricCell(pct_ns),
            )?;
        }
    }
    Ok(())
}

/// Render the file-size comparison.
///
/// Same row order as the build-time report, over the stored file sizes.
/// The percentage column is the absolute change relative to the typed
/// size.
pub fn file_size_report<W: Write>(table: &ComparisonTable, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "| Artifact type | Number of types | File size (bytes) - typed | File size (bytes) - generic | Increase (bytes) | Increase (%) |"
    )?;
    writeln!(
        out,
        "|:-------------:|:---------------:|:-------------------------:|:---------------------------:|:----------------:|:------------:|"
    )?;

    for file_type in FileType::ALL {
        for (row, count) in TypeCount::RENDERED.iter().enumerate() {
            let label = if row == 0 { file_type.label() } else { "" };
            let typed = table.get(ListType::Typed, file_type, *count);
            let generic = table.get(ListType::Generic, file_type, *count);

            let (delta, pct) = match (typed, generic) {
                (Some(t), Some(g)) => (
                    Some(g.bytes_per_op - t.bytes_per_op),
                    pct_increase(t.bytes_per_op, g.bytes_per_op).map(f64::abs),
                ),
                _ => (None, None),
            };

            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                label,
                count,
                MetricCell(typed.map(|c| c.bytes_per_op)),
                MetricCell(generic.map(|c| c.bytes_per_op)),
                MetricCell(delta),
                MetricCell(pct),
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::BenchLine;

    fn line(ops: f64, ns: f64, bytes: f64, allocs: Option<f64>) -> BenchLine {
        BenchLine {
            name: String::new(),
            ops,
            ns_per_op: ns,
            bytes_per_op: bytes,
            allocs_per_op: allocs,
        }
    }

    fn render_to_string<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        render(&mut buf).expect("rendering to a Vec never fails");
        String::from_utf8(buf).expect("reports are UTF-8")
    }

    #[test]
    fn test_boxing_report_literal_output() {
        let mut table = BoxingTable::new();
        table.push(ListType::Boxed, line(10.0, 4.0, 3.0, Some(1.0)));
        table.push(ListType::Boxed, line(20.0, 5.0, 4.0, Some(2.0)));
        table.push(ListType::Generic, line(100.0, 5.0, 2.0, Some(1.0)));

        let output = render_to_string(|buf| boxing_report(&table, buf));
        let expected = "\
| List type | Number of types | Operations | ns/op | Bytes/op | Allocs/op |
|:---------:|:---------------:|:----------:|:-----:|:--------:|:---------:|
| Boxed | 1 | 15 | 4.5 | 3.5 | 1.5 |
| Generic | 1 | 100 | 5 | 2 | 1 |
| Typed | 1 | N/A | N/A | N/A | N/A |
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_build_time_report_row_values() {
        let mut table = ComparisonTable::new();
        table.insert(
            ListType::Typed,
            FileType::Package,
            TypeCount(0),
            &line(10.0, 100.0, 0.0, None),
        );
        table.insert(
            ListType::Generic,
            FileType::Package,
            TypeCount(0),
            &line(12.0, 150.0, 0.0, None),
        );

        let output = render_to_string(|buf| build_time_report(&table, buf));
        let lines: Vec<&str> = output.lines().collect();
        // Header, separator, six pkg rows, six bin rows.
        assert_eq!(lines.len(), 14);
        assert_eq!(
            lines[2],
            "| pkg | 0 | 10 | 12 | 2 | 20 | 100 | 150 | 50 | 50 |"
        );
        // Rows past the first of a group leave the artifact label blank.
        assert_eq!(
            lines[3],
            "|  | 1 | N/A | N/A | N/A | N/A | N/A | N/A | N/A | N/A |"
        );
    }

    #[test]
    fn test_build_time_report_is_file_type_major() {
        let table = ComparisonTable::new();
        let output = render_to_string(|buf| build_time_report(&table, buf));
        let firsts: Vec<(String, String)> = output
            .lines()
            .skip(2)
            .map(|l| {
                let mut cells = l.split('|').skip(1).map(str::trim);
                (
                    cells.next().unwrap_or("").to_string(),
                    cells.next().unwrap_or("").to_string(),
                )
            })
            .collect();
        let expected: Vec<(String, String)> = ["pkg", "", "", "", "", "", "bin", "", "", "", "", ""]
            .iter()
            .zip([0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5])
            .map(|(label, count)| (label.to_string(), count.to_string()))
            .collect();
        assert_eq!(firsts, expected);
    }

    #[test]
    fn test_build_time_negative_increase() {
        let mut table = ComparisonTable::new();
        // Generic faster than typed: deltas and percentages go negative.
        table.insert(
            ListType::Typed,
            FileType::Binary,
            TypeCount(2),
            &line(20.0, 200.0, 0.0, None),
        );
        table.insert(
            ListType::Generic,
            FileType::Binary,
            TypeCount(2),
            &line(15.0, 150.0, 0.0, None),
        );

        let output = render_to_string(|buf| build_time_report(&table, buf));
        let row = output.lines().nth(10).expect("bin row for 2 types");
        assert_eq!(row, "|  | 2 | 20 | 15 | -5 | -25 | 200 | 150 | -50 | -25 |");
    }

    #[test]
    fn test_build_time_zero_typed_denominator() {
        let mut table = ComparisonTable::new();
        table.insert(
            ListType::Typed,
            FileType::Package,
            TypeCount(1),
            &line(0.0, 0.0, 0.0, None),
        );
        table.insert(
            ListType::Generic,
            FileType::Package,
            TypeCount(1),
            &line(5.0, 10.0, 0.0, None),
        );

        let output = render_to_string(|buf| build_time_report(&table, buf));
        let row = output.lines().nth(3).expect("pkg row for 1 type");
        // Deltas still computable, percentages are not.
        assert_eq!(row, "|  | 1 | 0 | 5 | 5 | N/A | 0 | 10 | 10 | N/A |");
    }

    #[test]
    fn test_file_size_report_literal_output() {
        let mut table = ComparisonTable::new();
        table.insert(
            ListType::Typed,
            FileType::Package,
            TypeCount(0),
            &line(1.0, 0.0, 100.0, None),
        );
        table.insert(
            ListType::Generic,
            FileType::Package,
            TypeCount(0),
            &line(1.0, 0.0, 250.0, None),
        );

        let output = render_to_string(|buf| file_size_report(&table, buf));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "| Artifact type | Number of types | File size (bytes) - typed | File size (bytes) - generic | Increase (bytes) | Increase (%) |"
        );
        assert_eq!(lines[2], "| pkg | 0 | 100 | 250 | 150 | 150 |");
        assert_eq!(lines[8], "| bin | 0 | N/A | N/A | N/A | N/A |");
    }

    #[test]
    fn test_file_size_percent_is_absolute() {
        let mut table = ComparisonTable::new();
        // Generic smaller than typed: the byte delta is negative but the
        // percentage column reports magnitude.
        table.insert(
            ListType::Typed,
            FileType::Binary,
            TypeCount(5),
            &line(1.0, 0.0, 200.0, None),
        );
        table.insert(
            ListType::Generic,
            FileType::Binary,
            TypeCount(5),
            &line(1.0, 0.0, 150.0, None),
        );

        let output = render_to_string(|buf| file_size_report(&table, buf));
        let row = output.lines().nth(13).expect("bin row for 5 types");
        assert_eq!(row, "|  | 5 | 200 | 150 | -50 | 25 |");
    }

    #[test]
    fn test_empty_interface_cells_are_not_rendered() {
        let mut table = ComparisonTable::new();
        table.insert(
            ListType::Typed,
            FileType::Package,
            TypeCount::EMPTY_INTERFACE,
            &line(1.0, 1.0, 1.0, None),
        );

        let output = render_to_string(|buf| build_time_report(&table, buf));
        // Only counts 0..5 appear; the baseline stays out of the table.
        assert!(!output.contains("| -1 |"));
        assert_eq!(output.lines().count(), 14);
    }
}

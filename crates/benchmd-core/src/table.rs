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

//! Aggregation tables.
//!
//! Two table shapes, one per report family. [`BoxingTable`] keeps every
//! record so the renderer can average them; [`ComparisonTable`] keeps a
//! single cell per (list type, file type, type count) key where a later
//! record for the same key overwrites the earlier one. Both tables are
//! owned values built by the pipeline driver and handed to the renderer;
//! there is no ambient mutable state.

use std::collections::BTreeMap;

use crate::classify::{FileType, ListType, TypeCount};
use crate::matcher::BenchLine;
use crate::round::round2;

/// Per-list-type record accumulator for the boxing report.
#[derive(Debug, Default, Clone)]
pub struct BoxingTable {
    buckets: BTreeMap<ListType, Vec<BenchLine>>,
}

/// Arithmetic means over one list type's accumulated records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxingAverages {
    pub ops: f64,
    pub ns_per_op: f64,
    pub bytes_per_op: f64,
    pub allocs_per_op: f64,
}

impl BoxingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its list-type bucket, creating the bucket on
    /// first use. Insertion order is preserved.
    pub fn push(&mut self, list_type: ListType, line: BenchLine) {
        self.buckets.entry(list_type).or_default().push(line);
    }

    /// Records accumulated for a list type, in input order.
    pub fn records(&self, list_type: ListType) -> &[BenchLine] {
        self.buckets.get(&list_type).map_or(&[], Vec::as_slice)
    }

    /// Arithmetic mean of each numeric field for a list type.
    ///
    /// Returns `None` when no records were accumulated for the type, so
    /// the renderer can emit its documented `N/A` sentinel instead of
    /// dividing by zero. A record without an allocs field contributes 0 to
    /// the allocations mean.
    pub fn averages(&self, list_type: ListType) -> Option<BoxingAverages> {
        let records = self.records(list_type);
        if records.is_empty() {
            return None;
        }

        let mut ops = 0.0;
        let mut ns_per_op = 0.0;
        let mut bytes_per_op = 0.0;
        let mut allocs_per_op = 0.0;
        for rec in records {
            ops += rec.ops;
            ns_per_op += rec.ns_per_op;
            bytes_per_op += rec.bytes_per_op;
            allocs_per_op += rec.allocs_per_op.unwrap_or(0.0);
        }

        // The rule rounds the mean, not the running sums.
        let n = records.len() as f64;
        Some(BoxingAverages {
            ops: round2(ops / n),
            ns_per_op: round2(ns_per_op / n),
            bytes_per_op: round2(bytes_per_op / n),
            allocs_per_op: round2(allocs_per_op / n),
        })
    }
}

/// One stored cell of a comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ops: f64,
    pub ns_per_op: f64,
    pub bytes_per_op: f64,
}

/// Last-write-wins cell map for the build-time and file-size reports.
#[derive(Debug, Default, Clone)]
pub struct ComparisonTable {
    cells: BTreeMap<(ListType, FileType, TypeCount), Cell>,
}

impl ComparisonTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record's numeric fields at its key, rounding each field on
    /// the way in. A prior value for the same key is overwritten; no
    /// averaging takes place.
    pub fn insert(
        &mut self,
        list_type: ListType,
        file_type: FileType,
        type_count: TypeCount,
        line: &BenchLine,
    ) {
        self.cells.insert(
            (list_type, file_type, type_count),
            Cell {
                ops: round2(line.ops),
                ns_per_op: round2(line.ns_per_op),
                bytes_per_op: round2(line.bytes_per_op),
            },
        );
    }

    /// The stored cell for a key, if any record reached it.
    pub fn get(
        &self,
        list_type: ListType,
        file_type: FileType,
        type_count: TypeCount,
    ) -> Option<&Cell> {
        self.cells.get(&(list_type, file_type, type_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, ops: f64, ns: f64, bytes: f64, allocs: Option<f64>) -> BenchLine {
        BenchLine {
            name: name.to_string(),
            ops,
            ns_per_op: ns,
            bytes_per_op: bytes,
            allocs_per_op: allocs,
        }
    }

    #[test]
    fn test_boxing_push_preserves_input_order() {
        let mut table = BoxingTable::new();
        table.push(ListType::Boxed, line("a", 1.0, 1.0, 1.0, Some(1.0)));
        table.push(ListType::Boxed, line("b", 2.0, 2.0, 2.0, Some(2.0)));

        let records = table.records(ListType::Boxed);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a");
        assert_eq!(records[1].name, "b");
    }

    #[test]
    fn test_boxing_empty_bucket() {
        let table = BoxingTable::new();
        assert!(table.records(ListType::Typed).is_empty());
        assert_eq!(table.averages(ListType::Typed), None);
    }

    #[test]
    fn test_boxing_mean() {
        let mut table = BoxingTable::new();
        table.push(ListType::Generic, line("a", 10.0, 4.0, 3.0, Some(1.0)));
        table.push(ListType::Generic, line("b", 20.0, 5.0, 4.0, Some(2.0)));

        let avg = table.averages(ListType::Generic).expect("bucket has records");
        assert_eq!(avg.ops, 15.0);
        assert_eq!(avg.ns_per_op, 4.5);
        assert_eq!(avg.bytes_per_op, 3.5);
        assert_eq!(avg.allocs_per_op, 1.5);
    }

    #[test]
    fn test_boxing_mean_rounds_the_mean() {
        let mut table = BoxingTable::new();
        table.push(ListType::Typed, line("a", 1.0, 1.0, 1.0, None));
        table.push(ListType::Typed, line("b", 1.0, 1.0, 1.0, None));
        table.push(ListType::Typed, line("c", 2.0, 1.0, 1.0, None));

        let avg = table.averages(ListType::Typed).expect("bucket has records");
        // 4/3 rounded to two decimals, missing allocs counted as zero.
        assert_eq!(avg.ops, 1.33);
        assert_eq!(avg.allocs_per_op, 0.0);
    }

    #[test]
    fn test_comparison_last_write_wins() {
        let mut table = ComparisonTable::new();
        let key = (ListType::Typed, FileType::Package, TypeCount(2));
        table.insert(key.0, key.1, key.2, &line("a", 10.0, 100.0, 5.0, None));
        table.insert(key.0, key.1, key.2, &line("b", 99.0, 900.0, 7.0, None));

        let cell = table.get(key.0, key.1, key.2).expect("cell stored");
        assert_eq!(cell.ops, 99.0);
        assert_eq!(cell.ns_per_op, 900.0);
        assert_eq!(cell.bytes_per_op, 7.0);
    }

    #[test]
    fn test_comparison_rounds_on_insert() {
        let mut table = ComparisonTable::new();
        table.insert(
            ListType::Generic,
            FileType::Binary,
            TypeCount(0),
            &line("a", 10.0, 123.456, 5.0, None),
        );
        let cell = table
            .get(ListType::Generic, FileType::Binary, TypeCount(0))
            .expect("cell stored");
        assert_eq!(cell.ns_per_op, 123.46);
    }

    #[test]
    fn test_comparison_distinct_keys_do_not_collide() {
        let mut table = ComparisonTable::new();
        table.insert(
            ListType::Typed,
            FileType::Package,
            TypeCount(0),
            &line("a", 1.0, 1.0, 1.0, None),
        );
        table.insert(
            ListType::Typed,
            FileType::Binary,
            TypeCount(0),
            &line("b", 2.0, 2.0, 2.0, None),
        );

        assert_eq!(
            table
                .get(ListType::Typed, FileType::Package, TypeCount(0))
                .map(|c| c.ops),
            Some(1.0)
        );
        assert_eq!(
            table
                .get(ListType::Typed, FileType::Binary, TypeCount(0))
                .map(|c| c.ops),
            Some(2.0)
        );
        assert_eq!(table.get(ListType::Generic, FileType::Package, TypeCount(0)), None);
    }
}

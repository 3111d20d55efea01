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

//! Parsing, aggregation and markdown rendering for Go benchmark output.
//!
//! This crate implements the full pipeline behind the `benchmd` tool:
//!
//! - [`matcher`]: recognizes benchmark-result lines and extracts the
//!   benchmark name plus numeric fields (ops, ns/op, bytes/op, allocs/op).
//! - [`classify`]: maps a benchmark name to a [`ListType`] and, for the
//!   comparison reports, a [`FileType`] and [`TypeCount`].
//! - [`table`]: accumulates matched records into one of two table shapes,
//!   a per-list-type record list ([`BoxingTable`]) or a last-write-wins
//!   cell map ([`ComparisonTable`]).
//! - [`render`]: turns a fully built table into a markdown table on any
//!   [`std::io::Write`] sink.
//!
//! The pipeline is strictly linear: all input is consumed before any report
//! is rendered, and a table is built once, read once, then discarded.

pub mod classify;
mod error;
pub mod matcher;
pub mod render;
pub mod round;
pub mod table;

pub use classify::{FileType, ListType, TypeCount};
pub use error::{Error, Result};
pub use matcher::{match_line, BenchLine};
pub use round::{round2, Rounded};
pub use table::{BoxingAverages, BoxingTable, Cell, ComparisonTable};

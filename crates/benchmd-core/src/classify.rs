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

//! Benchmark name classification.
//!
//! All three classifiers are pure substring checks against the benchmark
//! name, performed in a fixed order where the first hit wins. The check
//! order is part of the contract: a contrived name containing both
//! `/boxed` and `/generic` classifies as [`ListType::Boxed`].

use std::fmt;

use crate::error::{Error, Result};

/// Benchmark variant axis: which list implementation style was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListType {
    /// `interface{}`-boxed list.
    Boxed,
    /// Type-parameterized list.
    Generic,
    /// Hand-written, concretely typed list.
    Typed,
}

impl ListType {
    /// Render order for the boxing report.
    pub const ALL: [ListType; 3] = [ListType::Boxed, ListType::Generic, ListType::Typed];

    /// Classify a benchmark name by its list-type substring.
    ///
    /// Checks `/boxed`, `/generic`, `/typed` in that order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedListType`] when none of the substrings
    /// is present.
    pub fn classify(name: &str) -> Result<Self> {
        if name.contains("/boxed") {
            Ok(ListType::Boxed)
        } else if name.contains("/generic") {
            Ok(ListType::Generic)
        } else if name.contains("/typed") {
            Ok(ListType::Typed)
        } else {
            Err(Error::UnrecognizedListType(name.to_string()))
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListType::Boxed => write!(f, "Boxed"),
            ListType::Generic => write!(f, "Generic"),
            ListType::Typed => write!(f, "Typed"),
        }
    }
}

/// Artifact axis: which build output was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileType {
    /// Compiled package archive.
    Package,
    /// Linked binary.
    Binary,
}

impl FileType {
    /// Render order for the comparison reports.
    pub const ALL: [FileType; 2] = [FileType::Package, FileType::Binary];

    /// Classify a benchmark name by its file-type substring.
    ///
    /// Checks `pkg/` then `bin/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedFileType`] when neither substring is
    /// present.
    pub fn classify(name: &str) -> Result<Self> {
        if name.contains("pkg/") {
            Ok(FileType::Package)
        } else if name.contains("bin/") {
            Ok(FileType::Binary)
        } else {
            Err(Error::UnrecognizedFileType(name.to_string()))
        }
    }

    /// Markdown cell label, matching the benchmark path component.
    pub fn label(&self) -> &'static str {
        match self {
            FileType::Package => "pkg",
            FileType::Binary => "bin",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of distinct type parameters a generic benchmark variant was
/// instantiated with, or −1 for the `interface{}` baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeCount(pub i8);

impl TypeCount {
    /// The `interface{}` baseline variant.
    pub const EMPTY_INTERFACE: TypeCount = TypeCount(-1);

    /// Render order for the comparison reports. The baseline is
    /// accumulated but never rendered.
    pub const RENDERED: [TypeCount; 6] = [
        TypeCount(0),
        TypeCount(1),
        TypeCount(2),
        TypeCount(3),
        TypeCount(4),
        TypeCount(5),
    ];

    /// Classify a benchmark name by its type-count substring.
    ///
    /// Checks `/empty_interface` then `/0-types` through `/5-types`, first
    /// hit wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedTypeCount`] when none of the substrings
    /// is present.
    pub fn classify(name: &str) -> Result<Self> {
        const PATTERNS: [(&str, i8); 7] = [
            ("/empty_interface", -1),
            ("/0-types", 0),
            ("/1-types", 1),
            ("/2-types", 2),
            ("/3-types", 3),
            ("/4-types", 4),
            ("/5-types", 5),
        ];
        for (pat, count) in PATTERNS {
            if name.contains(pat) {
                return Ok(TypeCount(count));
            }
        }
        Err(Error::UnrecognizedTypeCount(name.to_string()))
    }
}

impl fmt::Display for TypeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

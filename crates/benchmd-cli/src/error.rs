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

//! Structured error types for the benchmd CLI.
//!
//! All CLI operations return `Result<T, CliError>`; `main` prints the
//! error to stderr and exits with a failure code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchmd CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O operation on a named input file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Reading stdin or writing the report failed.
    #[error("I/O error: {message}")]
    Stream {
        /// The error message
        message: String,
    },

    /// A matched benchmark name could not be classified. Fatal for the
    /// whole run; no report is printed.
    #[error(transparent)]
    Classify(#[from] benchmd_core::Error),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a stream error from a raw I/O failure.
    pub fn stream(source: io::Error) -> Self {
        Self::Stream {
            message: source.to_string(),
        }
    }
}

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

//! Error types for benchmark classification.

use thiserror::Error;

/// An error raised while classifying a matched benchmark name.
///
/// Classification errors are fatal for the whole run: a line that matches
/// the benchmark pattern but cannot be assigned to a category means the
/// input does not belong to the selected report type, and no table is
/// printed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name contains none of `/boxed`, `/generic`, `/typed`.
    #[error("unrecognized list type in benchmark name '{0}'")]
    UnrecognizedListType(String),

    /// The name contains neither `pkg/` nor `bin/`.
    #[error("unrecognized file type in benchmark name '{0}'")]
    UnrecognizedFileType(String),

    /// The name contains neither `/empty_interface` nor `/0-types` through
    /// `/5-types`.
    #[error("unrecognized number of types in benchmark name '{0}'")]
    UnrecognizedTypeCount(String),
}

/// Convenience alias for classification results.
pub type Result<T> = std::result::Result<T, Error>;

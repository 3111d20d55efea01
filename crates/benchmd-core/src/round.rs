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

//! The shared numeric rounding and formatting rule.
//!
//! Every value the reports emit — stored cells, means, deltas, percentages —
//! goes through the same rule: round to at most two decimal places, print
//! whole values without a decimal part, and never pad with trailing zeros.
//! So `3` prints as `3`, `3.0` as `3`, `3.14159` as `3.14`, and `3.50` as
//! `3.5`.

use std::fmt;

/// Round a value to at most two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Display adapter applying the two-decimal formatting rule.
///
/// # Examples
///
/// ```
/// use benchmd_core::Rounded;
///
/// assert_eq!(Rounded(3.0).to_string(), "3");
/// assert_eq!(Rounded(3.14159).to_string(), "3.14");
/// assert_eq!(Rounded(3.5).to_string(), "3.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounded(pub f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = round2(self.0);
        if v.fract() == 0.0 {
            write!(f, "{}", v as i64)
        } else {
            let s = format!("{v:.2}");
            f.write_str(s.trim_end_matches('0').trim_end_matches('.'))
        }
    }
}

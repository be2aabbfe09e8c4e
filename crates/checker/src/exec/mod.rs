// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution: feed a script, collect merged output, bound
//! the whole exchange by a deadline.

mod error;
mod result;
mod run;

pub use error::RunError;
pub use result::RunOutcome;
pub use run::run_script;

#[cfg(test)]
#[path = "../exec_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::time::Duration;

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

/// Deadline for a whole run when no override is set.
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(30);

/// Log filter used when neither `MICRO_CHECK_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Run deadline (default 30s, configurable via `MICRO_CHECK_TIMEOUT_MS`).
pub fn run_timeout() -> Duration {
    std::env::var("MICRO_CHECK_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_RUN_TIMEOUT)
}

/// Log filter directive: `MICRO_CHECK_LOG` > `RUST_LOG` > `warn`.
pub fn log_filter() -> String {
    ["MICRO_CHECK_LOG", "RUST_LOG"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

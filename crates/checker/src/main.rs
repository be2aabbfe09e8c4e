// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `micro-checker`: smoke-test a shell by feeding it a numbered script.
//!
//! # Environment variables
//!
//! | Variable                 | Default | Description                         |
//! |--------------------------|---------|-------------------------------------|
//! | `MICRO_CHECK_TIMEOUT_MS` | `30000` | Deadline for the whole run          |
//! | `MICRO_CHECK_LOG`        | `warn`  | Log filter (falls back to RUST_LOG) |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mc_checker::harness::write_transcript;
use mc_checker::{env, CheckArgs, ExitError, Harness};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env::log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CheckArgs::parse();

    if let Err(err) = run(args).await {
        // Verdict diagnostics were already printed with the transcript.
        if err.code != mc_checker::verdict::FAILURE_EXIT_CODE {
            eprintln!("{}", err.message);
        }
        std::process::exit(err.code);
    }
}

async fn run(args: CheckArgs) -> Result<(), ExitError> {
    let harness = Harness::from_args(&args, env::run_timeout());
    let mut stdout = std::io::stdout().lock();

    if args.dry_run {
        return write_transcript(&mut stdout, &harness.script().render());
    }
    harness.check(&mut stdout).await
}

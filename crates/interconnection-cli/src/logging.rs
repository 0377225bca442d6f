/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use tracing::Dispatch;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::errors::{CliError, CliResult};

// Transport crates are chatty at debug level and drown the CLI's own output.
const QUIET_TARGETS: &[&str] = &[
    "hyper=warn",
    "hyper_util=warn",
    "reqwest=warn",
    "rustls=warn",
    "h2=warn",
];

/// Builds the log sink handed to every command through the runtime
/// context. Logs go to stderr so they never mix with rendered output.
/// Use `export RUST_LOG=trace|debug|info|warn|error` to change log level.
pub fn log_sink(debug: bool) -> CliResult<Dispatch> {
    let default_level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let mut env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    for directive in QUIET_TARGETS {
        env_filter = env_filter.add_directive(
            directive
                .parse()
                .map_err(|e| CliError::GenericError(format!("bad log directive: {e}")))?,
        );
    }

    let stderr_formatter = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(debug)
        .with_writer(std::io::stderr);

    Ok(Dispatch::new(
        tracing_subscriber::registry().with(stderr_formatter.with_filter(env_filter)),
    ))
}

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

mod async_write;
mod batch;
mod cfg;
mod columns;
mod errors;
mod generate_shell_complete;
mod interconnection;
mod logging;
mod output;
mod rpc;
#[cfg(test)]
mod testing;

use std::pin::Pin;

use clap::Parser;
use tokio::io::AsyncWrite;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::file::{FileConfig, client_config};
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::rpc::ApiClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = CliOptions::parse();

    let log_sink = logging::log_sink(options.debug)?;
    tracing::dispatcher::set_global_default(log_sink.clone())?;

    if let CliCommand::GenerateShellComplete(cmd) = &options.commands {
        cmd.run()?;
        return Ok(());
    }

    let file_config = FileConfig::load(options.config.as_deref())?;
    let api_client = ApiClient::new(&client_config(&options, &file_config)?)?;

    let output_file: Pin<Box<dyn AsyncWrite>> = match &options.output {
        Some(path) => Box::pin(tokio::fs::File::create(path).await?),
        None => Box::pin(tokio::io::stdout()),
    };

    let ctx = RuntimeContext {
        api_client,
        config: RuntimeConfig {
            format: options.format,
        },
        output_file,
        log_sink,
    };

    let CliCommand::Interconnection(cmd) = options.commands else {
        return Ok(());
    };
    cmd.dispatch(ctx).await?;

    Ok(())
}

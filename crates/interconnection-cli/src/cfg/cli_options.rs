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

use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;
use crate::{generate_shell_complete, interconnection};

#[derive(Parser, Debug)]
#[clap(
    name = "interconnection-cli",
    version,
    about = "Manage interconnections between local and remote networking resources"
)]
pub struct CliOptions {
    #[clap(
        long,
        global = true,
        env = "OS_NETWORK_URL",
        help = "Networking service endpoint, e.g. https://neutron.example:9696"
    )]
    pub os_url: Option<String>,

    #[clap(
        long,
        global = true,
        env = "OS_TOKEN",
        hide_env_values = true,
        help = "Auth token sent with every request"
    )]
    pub os_token: Option<String>,

    #[clap(
        long,
        global = true,
        env = "OS_NETWORK_TIMEOUT",
        help = "Request timeout in seconds [default: 30]"
    )]
    pub timeout: Option<u64>,

    #[clap(
        long,
        global = true,
        env = "INTERCONNECTION_CLI_CONFIG",
        help = "TOML config file [default: ~/.config/interconnection-cli/config.toml]"
    )]
    pub config: Option<PathBuf>,

    #[clap(
        short = 'f',
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::AsciiTable,
        help = "Output format"
    )]
    pub format: OutputFormat,

    #[clap(
        short,
        long,
        global = true,
        help = "Write output to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[clap(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum CliCommand {
    #[clap(flatten)]
    Interconnection(interconnection::Cmd),
    #[clap(
        about = "Generate shell autocomplete. Source the output of this command: `source <(interconnection-cli generate-shell-complete bash)`"
    )]
    GenerateShellComplete(generate_shell_complete::Cmd),
}

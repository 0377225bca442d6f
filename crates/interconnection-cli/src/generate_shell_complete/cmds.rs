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

use std::io::Write;

use clap::CommandFactory;
use clap_complete::shells;

use super::args::Shell;
use crate::cfg::cli_options::CliOptions;
use crate::errors::CliResult;

const BIN_NAME: &str = "interconnection-cli";

pub fn generate<W: Write>(shell: Shell, writer: &mut W) -> CliResult<()> {
    let mut cmd = CliOptions::command();
    match shell {
        Shell::Bash => clap_complete::generate(shells::Bash, &mut cmd, BIN_NAME, writer),
        Shell::Fish => clap_complete::generate(shells::Fish, &mut cmd, BIN_NAME, writer),
        Shell::Zsh => clap_complete::generate(shells::Zsh, &mut cmd, BIN_NAME, writer),
    }
    writer.flush()?;
    Ok(())
}

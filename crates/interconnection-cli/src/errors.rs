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

use neutron_client::NeutronError;

/// CliError enumerates everything a command can fail with. Errors from the
/// networking service pass through untouched; `Command` carries the
/// messages this CLI composes itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Neutron(#[from] NeutronError),
    #[error("{0}")]
    Command(String),
    #[error("Error: {0}")]
    GenericError(String),
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
    #[error("Unable to parse config file {path}: {source}")]
    ConfigFileError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

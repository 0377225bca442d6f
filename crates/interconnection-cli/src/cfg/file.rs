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

use std::io;
use std::path::{Path, PathBuf};

use neutron_client::{Config, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;

use crate::cfg::cli_options::CliOptions;
use crate::errors::{CliError, CliResult};

const DEFAULT_CONFIG_PATH: &str = ".config/interconnection-cli/config.toml";

/// Connection defaults read from the config file. Flags and environment
/// variables take precedence over anything set here.
///
/// ```toml
/// url = "https://neutron.example:9696"
/// token = "gAAAA..."
/// timeout_secs = 10
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Loads `explicit`, which must exist, or else the default path, which
    /// may be absent.
    pub fn load(explicit: Option<&Path>) -> CliResult<FileConfig> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match default_path() {
                Some(path) => (path, false),
                None => return Ok(FileConfig::default()),
            },
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
                return Ok(FileConfig::default());
            }
            Err(e) => return Err(CliError::IOError(e)),
        };
        tracing::debug!(path = %path.display(), "loaded config file");

        toml::from_str(&text).map_err(|source| CliError::ConfigFileError { path, source })
    }
}

fn default_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_PATH))
}

/// Merges CLI options (flags and env) over the config file to produce the
/// networking client config.
pub fn client_config(options: &CliOptions, file: &FileConfig) -> CliResult<Config> {
    let endpoint = options
        .os_url
        .clone()
        .or_else(|| file.url.clone())
        .ok_or_else(|| {
            CliError::ConfigError(
                "no networking endpoint configured; pass --os-url, set OS_NETWORK_URL or add `url` to the config file"
                    .to_string(),
            )
        })?;

    Ok(Config {
        endpoint,
        token: options.os_token.clone().or_else(|| file.token.clone()),
        timeout_secs: options
            .timeout
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    })
}

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

//! neutron-client is a small REST client for the networking service's
//! interconnection extension. It owns the wire model, name-or-ID
//! resolution and the error taxonomy used by the interconnection CLI.

// these are not visible outside of this crate
mod client;
mod model;

// re-exports
pub use client::{HttpNetworkingClient, NetworkingClient};
pub use model::{
    InterconnectionCreate, InterconnectionType, InterconnectionUpdate, Object, Resource,
};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the networking service, e.g. `https://neutron.example:9696`.
    pub endpoint: String,
    /// Pre-issued token sent as `X-Auth-Token`.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            endpoint: Default::default(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum NeutronError {
    #[error("Unable to find {resource} with name or id '{name_or_id}'")]
    NotFound {
        resource: Resource,
        name_or_id: String,
    },
    #[error(
        "Multiple {resource} matches found for name '{name_or_id}', use an ID to be more specific."
    )]
    Ambiguous {
        resource: Resource,
        name_or_id: String,
    },
    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },
    #[error("Error talking to the networking service: {0}")]
    Communication(String),
    #[error("Error Serialising/Deserialising: {0}")]
    Serde(String),
    #[error("Invalid networking endpoint: {0}")]
    InvalidEndpoint(String),
}

impl NeutronError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NeutronError::NotFound { .. } | NeutronError::Http { status: 404, .. }
        )
    }
}

impl From<reqwest::Error> for NeutronError {
    fn from(value: reqwest::Error) -> NeutronError {
        NeutronError::Communication(format!("Communication error: {}", value))
    }
}

impl From<serde_json::Error> for NeutronError {
    fn from(value: serde_json::Error) -> NeutronError {
        NeutronError::Serde(value.to_string())
    }
}

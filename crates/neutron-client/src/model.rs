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

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resource as returned by the service. Kept as a JSON object so
/// callers can project whichever fields the server chose to send.
pub type Object = serde_json::Map<String, serde_json::Value>;

/// Resource kinds this client knows how to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Interconnection,
}

impl Resource {
    /// Singular name, also used as the request/response envelope key.
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Interconnection => "interconnection",
        }
    }

    /// Plural name, used as the collection envelope key.
    pub fn plural(&self) -> &'static str {
        match self {
            Resource::Interconnection => "interconnections",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Resource::Interconnection => "Interconnection",
        }
    }

    pub fn collection_path(&self) -> &'static str {
        match self {
            Resource::Interconnection => "/v2.0/interconnection/interconnections",
        }
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection_path(), urlencoding::encode(id))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum InterconnectionType {
    #[cfg_attr(feature = "cli", value(name = "router"))]
    Router,
    #[cfg_attr(feature = "cli", value(name = "network_l2"))]
    NetworkL2,
    #[default]
    #[cfg_attr(feature = "cli", value(name = "network_l3"))]
    NetworkL3,
}

impl fmt::Display for InterconnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterconnectionType::Router => "router",
            InterconnectionType::NetworkL2 => "network_l2",
            InterconnectionType::NetworkL3 => "network_l3",
        };
        f.write_str(s)
    }
}

/// Body of a create request. Every field is sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InterconnectionCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub interconnection_type: InterconnectionType,
    pub local_resource_id: String,
    pub remote_resource_id: String,
    pub remote_keystone: String,
    pub remote_region: String,
}

/// Body of an update request. Absent fields are left untouched by the
/// server, so they are never serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InterconnectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl InterconnectionUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

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

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use neutron_client::InterconnectionType;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Create an interconnection for a given project")]
    Create(CreateInterconnection),
    #[clap(about = "Delete a given interconnection")]
    Delete(DeleteInterconnection),
    #[clap(about = "List interconnections")]
    List(ListInterconnection),
    #[clap(about = "Set interconnection properties")]
    Set(SetInterconnection),
    #[clap(about = "Show information of a given interconnection")]
    Show(ShowInterconnection),
}

#[derive(Parser, Debug)]
pub struct CreateInterconnection {
    #[clap(
        value_parser = NonEmptyStringValueParser::new(),
        help = "Name of the interconnection to create"
    )]
    pub name: String,

    #[clap(
        long = "type",
        value_enum,
        default_value_t = InterconnectionType::NetworkL3,
        help = "Interconnection type selection between router, l2 and l3 network"
    )]
    pub interconnection_type: InterconnectionType,

    #[clap(long, help = "Local neutron resource (name or ID)")]
    pub local_resource: String,

    #[clap(long, help = "Remote neutron resource (name or ID)")]
    pub remote_resource: String,

    #[clap(long, value_parser = parse_keystone_url, help = "Remote keystone URL")]
    pub remote_keystone: String,

    #[clap(long, help = "Remote region")]
    pub remote_region: String,
}

#[derive(Parser, Debug)]
pub struct DeleteInterconnection {
    #[clap(
        required = true,
        num_args = 1..,
        value_name = "INTERCONNECTION",
        help = "Interconnection(s) to delete (name or ID)"
    )]
    pub interconnections: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ListInterconnection {
    #[clap(long, help = "List additional fields in output")]
    pub long: bool,
}

#[derive(Parser, Debug)]
pub struct SetInterconnection {
    #[clap(long, help = "Name of the interconnection")]
    pub name: Option<String>,

    #[clap(help = "Interconnection to modify (name or ID)")]
    pub interconnection: String,
}

#[derive(Parser, Debug)]
pub struct ShowInterconnection {
    #[clap(help = "Interconnection to display (name or ID)")]
    pub interconnection: String,
}

// parse_keystone_url checks the value is a URL but keeps the user's exact
// spelling, since it is sent to the server verbatim.
fn parse_keystone_url(value: &str) -> Result<String, String> {
    url::Url::parse(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid keystone URL '{value}': {e}"))
}

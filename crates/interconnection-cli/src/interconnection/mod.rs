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

pub mod args;
pub mod cmds;


pub use args::Cmd;
use tracing::instrument::WithSubscriber;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::columns::Attribute;
use crate::columns::Visibility::{Long, Short};
use crate::errors::CliResult;
use crate::output;

// ATTRIBUTES is the projection table for interconnections, in display
// order.
pub(crate) const ATTRIBUTES: &[Attribute] = &[
    Attribute::new("id", "ID", Short),
    Attribute::new("project_id", "Project", Long),
    Attribute::new("name", "Name", Short),
    Attribute::new("type", "Type", Short),
    Attribute::new("state", "State", Short),
    Attribute::new("local_resource_id", "Local Neutron Resource", Long),
    Attribute::new("remote_resource_id", "Remote Neutron Resource", Long),
    Attribute::new("remote_keystone", "Remote Keystone URL", Long),
    Attribute::new("remote_region", "Remote Region", Long),
    Attribute::new("remote_interconnection_id", "Remote Interconnection", Long),
    Attribute::new("local_parameters", "Local Parameters", Long),
    Attribute::new("remote_parameters", "Remote Parameters", Long),
];

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let log_sink = ctx.log_sink.clone();
        async move {
            let output = match self {
                Cmd::Create(args) => cmds::create(args, &ctx.api_client).await?,
                Cmd::Delete(args) => cmds::delete(args, &ctx.api_client).await?,
                Cmd::List(args) => cmds::list(args, &ctx.api_client).await?,
                Cmd::Set(args) => cmds::set(args, &ctx.api_client).await?,
                Cmd::Show(args) => cmds::show(args, &ctx.api_client).await?,
            };
            output::render(output, ctx.config.format, &mut ctx.output_file).await
        }
        .with_subscriber(log_sink)
        .await
    }
}

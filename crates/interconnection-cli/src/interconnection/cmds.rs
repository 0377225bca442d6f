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

use neutron_client::{InterconnectionCreate, InterconnectionUpdate, Object, Resource};

use super::ATTRIBUTES;
use super::args::{
    CreateInterconnection, DeleteInterconnection, ListInterconnection, SetInterconnection,
    ShowInterconnection,
};
use crate::batch;
use crate::columns::{columns_for, headers_for, properties};
use crate::errors::{CliError, CliResult};
use crate::output::Output;
use crate::rpc::ApiClient;

const RESOURCE: Resource = Resource::Interconnection;

pub async fn create(args: CreateInterconnection, api_client: &ApiClient) -> CliResult<Output> {
    let object = api_client
        .0
        .create_interconnection(&create_request(args))
        .await?;
    Ok(show_one(&object))
}

pub async fn show(args: ShowInterconnection, api_client: &ApiClient) -> CliResult<Output> {
    let id = api_client
        .0
        .find_resource_id(RESOURCE, &args.interconnection)
        .await?;
    let object = api_client.0.show_interconnection(&id).await?;
    Ok(show_one(&object))
}

pub async fn list(args: ListInterconnection, api_client: &ApiClient) -> CliResult<Output> {
    let objects = api_client.0.list_interconnections().await?;
    let (headers, keys) = headers_for(ATTRIBUTES, args.long);

    let rows = objects
        .into_iter()
        .map(move |object| properties(&object, &keys));
    Ok(Output::List {
        headers,
        rows: Box::new(rows),
    })
}

pub async fn set(args: SetInterconnection, api_client: &ApiClient) -> CliResult<Output> {
    let id = api_client
        .0
        .find_resource_id(RESOURCE, &args.interconnection)
        .await?;

    api_client
        .0
        .update_interconnection(&id, &update_request(&args))
        .await
        .map_err(|e| {
            CliError::Command(format!(
                "Failed to update interconnection '{}': {}",
                args.interconnection, e
            ))
        })?;

    Ok(Output::None)
}

pub async fn delete(args: DeleteInterconnection, api_client: &ApiClient) -> CliResult<Output> {
    let report = batch::delete_each(RESOURCE, &args.interconnections, |name_or_id| {
        delete_one(api_client, name_or_id)
    })
    .await;

    report.into_result(RESOURCE)?;
    Ok(Output::None)
}

// delete_one returns the resolved id, which is what gets logged.
async fn delete_one(api_client: &ApiClient, name_or_id: String) -> CliResult<String> {
    let id = api_client
        .0
        .find_resource_id(RESOURCE, &name_or_id)
        .await?;
    api_client.0.delete_interconnection(&id).await?;
    Ok(id)
}

pub(crate) fn create_request(args: CreateInterconnection) -> InterconnectionCreate {
    InterconnectionCreate {
        name: args.name,
        interconnection_type: args.interconnection_type,
        local_resource_id: args.local_resource,
        remote_resource_id: args.remote_resource,
        remote_keystone: args.remote_keystone,
        remote_region: args.remote_region,
    }
}

// update_request only carries what the user asked to change. A missing
// --name means "leave it alone", never "clear it".
pub(crate) fn update_request(args: &SetInterconnection) -> InterconnectionUpdate {
    InterconnectionUpdate {
        name: args.name.clone(),
    }
}

fn show_one(object: &Object) -> Output {
    let (keys, labels) = columns_for(object, ATTRIBUTES);
    Output::ShowOne {
        labels,
        values: properties(object, &keys),
    }
}

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

use std::sync::Arc;

use neutron_client::{Config, HttpNetworkingClient, NetworkingClient};

use crate::errors::CliResult;

// ApiClient wraps whichever NetworkingClient the command runs against.
// Handlers only ever see the trait, so tests can swap in a fake.
#[derive(Clone, Debug)]
pub struct ApiClient(pub Arc<dyn NetworkingClient>);

impl ApiClient {
    pub fn new(config: &Config) -> CliResult<Self> {
        let client = HttpNetworkingClient::new_with_config(config)?;
        tracing::debug!(endpoint = client.endpoint(), "using networking service");
        Ok(ApiClient(Arc::new(client)))
    }
}

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

//! Shared fixtures for command tests: an in-memory networking client that
//! records every call, and a log sink that can be read back.

use std::collections::HashSet;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use neutron_client::{
    InterconnectionCreate, InterconnectionUpdate, NetworkingClient, NeutronError, Object,
    Resource,
};
use serde_json::{Value, json};

use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::output::OutputFormat;
use crate::rpc::ApiClient;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Create(InterconnectionCreate),
    List,
    Show(String),
    Update(String, InterconnectionUpdate),
    Delete(String),
    Find(String),
}

#[derive(Debug, Default)]
pub struct FakeNetworkingClient {
    objects: Mutex<Vec<Object>>,
    calls: Mutex<Vec<Call>>,
    failing_deletes: HashSet<String>,
    failing_updates: bool,
}

impl FakeNetworkingClient {
    pub fn with_objects(objects: Vec<Value>) -> Self {
        let objects = objects
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(o) => Some(o),
                _ => None,
            })
            .collect();
        FakeNetworkingClient {
            objects: Mutex::new(objects),
            ..Default::default()
        }
    }

    pub fn failing_delete(mut self, id: &str) -> Self {
        self.failing_deletes.insert(id.to_string());
        self
    }

    pub fn failing_updates(mut self) -> Self {
        self.failing_updates = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ids(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .filter_map(|o| o.get("id").and_then(Value::as_str).map(str::to_string))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn by_id(&self, id: &str) -> Option<Object> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.get("id").and_then(Value::as_str) == Some(id))
            .cloned()
    }
}

/// A fully populated interconnection as the service would return it.
pub fn interconnection(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "project_id": "p1",
        "name": name,
        "type": "network_l3",
        "state": "ACTIVE",
        "local_resource_id": "L1",
        "remote_resource_id": "R1",
        "remote_keystone": "https://keystone.remote:5000/v3",
        "remote_region": "east",
        "remote_interconnection_id": null,
        "local_parameters": {},
        "remote_parameters": {},
    })
}

fn http_not_found() -> NeutronError {
    NeutronError::Http {
        status: 404,
        message: "Not Found".to_string(),
    }
}

#[async_trait]
impl NetworkingClient for FakeNetworkingClient {
    async fn create_interconnection(
        &self,
        body: &InterconnectionCreate,
    ) -> Result<Object, NeutronError> {
        self.record(Call::Create(body.clone()));

        let mut object = match interconnection("new-id", &body.name) {
            Value::Object(o) => o,
            _ => unreachable!(),
        };
        object.insert("type".to_string(), json!(body.interconnection_type));
        object.insert("state".to_string(), json!("TO_VALIDATE"));
        object.insert("local_resource_id".to_string(), json!(body.local_resource_id));
        object.insert("remote_resource_id".to_string(), json!(body.remote_resource_id));
        object.insert("remote_keystone".to_string(), json!(body.remote_keystone));
        object.insert("remote_region".to_string(), json!(body.remote_region));
        self.objects.lock().unwrap().push(object.clone());
        Ok(object)
    }

    async fn list_interconnections(&self) -> Result<Vec<Object>, NeutronError> {
        self.record(Call::List);
        Ok(self.objects.lock().unwrap().clone())
    }

    async fn show_interconnection(&self, id: &str) -> Result<Object, NeutronError> {
        self.record(Call::Show(id.to_string()));
        self.by_id(id).ok_or_else(http_not_found)
    }

    async fn update_interconnection(
        &self,
        id: &str,
        body: &InterconnectionUpdate,
    ) -> Result<Object, NeutronError> {
        self.record(Call::Update(id.to_string(), body.clone()));
        if self.failing_updates {
            return Err(NeutronError::Http {
                status: 409,
                message: "Interconnection is busy".to_string(),
            });
        }

        let mut objects = self.objects.lock().unwrap();
        let object = objects
            .iter_mut()
            .find(|o| o.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(http_not_found)?;
        if let Some(name) = &body.name {
            object.insert("name".to_string(), json!(name));
        }
        Ok(object.clone())
    }

    async fn delete_interconnection(&self, id: &str) -> Result<(), NeutronError> {
        self.record(Call::Delete(id.to_string()));
        if self.failing_deletes.contains(id) {
            return Err(NeutronError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }

        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|o| o.get("id").and_then(Value::as_str) != Some(id));
        if objects.len() == before {
            return Err(http_not_found());
        }
        Ok(())
    }

    async fn find_resource(
        &self,
        resource: Resource,
        name_or_id: &str,
    ) -> Result<Object, NeutronError> {
        self.record(Call::Find(name_or_id.to_string()));
        if let Some(object) = self.by_id(name_or_id) {
            return Ok(object);
        }

        let mut matches: Vec<Object> = self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.get("name").and_then(Value::as_str) == Some(name_or_id))
            .cloned()
            .collect();
        match matches.len() {
            0 => Err(NeutronError::NotFound {
                resource,
                name_or_id: name_or_id.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(NeutronError::Ambiguous {
                resource,
                name_or_id: name_or_id.to_string(),
            }),
        }
    }
}

/// Collects formatted log lines written through `sink()`.
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn sink(&self) -> tracing::Dispatch {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || logs.clone())
            .finish();
        tracing::Dispatch::new(subscriber)
    }

    /// Lines logged at `level`, e.g. "WARN".
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::trim_start)
            .filter(|line| line.starts_with(level))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn api_client(fake: &Arc<FakeNetworkingClient>) -> ApiClient {
    ApiClient(fake.clone())
}

/// A context that discards output and sends logs to `logs`.
pub fn runtime_context(api_client: ApiClient, logs: &CapturedLogs) -> RuntimeContext {
    RuntimeContext {
        api_client,
        config: RuntimeConfig {
            format: OutputFormat::Json,
        },
        output_file: Box::pin(tokio::io::sink()),
        log_sink: logs.sink(),
    }
}

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

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::{Config, InterconnectionCreate, InterconnectionUpdate, NeutronError, Object, Resource};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

// trait to invoke REST methods on the networking service
#[async_trait]
pub trait NetworkingClient: std::fmt::Debug + Send + Sync + 'static {
    async fn create_interconnection(
        &self,
        body: &InterconnectionCreate,
    ) -> Result<Object, NeutronError>;
    async fn list_interconnections(&self) -> Result<Vec<Object>, NeutronError>;
    async fn show_interconnection(&self, id: &str) -> Result<Object, NeutronError>;
    async fn update_interconnection(
        &self,
        id: &str,
        body: &InterconnectionUpdate,
    ) -> Result<Object, NeutronError>;
    async fn delete_interconnection(&self, id: &str) -> Result<(), NeutronError>;

    /// Looks a resource up by ID first, then by name. A name shared by
    /// more than one resource is rejected rather than guessed.
    async fn find_resource(
        &self,
        resource: Resource,
        name_or_id: &str,
    ) -> Result<Object, NeutronError>;

    async fn find_resource_id(
        &self,
        resource: Resource,
        name_or_id: &str,
    ) -> Result<String, NeutronError> {
        let object = self.find_resource(resource, name_or_id).await?;
        match object.get("id").and_then(Value::as_str) {
            Some(id) => Ok(id.to_string()),
            None => Err(NeutronError::Serde(format!(
                "{} '{}' has no id",
                resource.title(),
                name_or_id
            ))),
        }
    }
}

#[derive(Debug)]
pub struct HttpNetworkingClient {
    config: Config,
    http_client: reqwest::Client,
}

impl HttpNetworkingClient {
    pub fn new_with_config(config: &Config) -> Result<HttpNetworkingClient, NeutronError> {
        let endpoint = config.endpoint.trim_end_matches('/');
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(NeutronError::InvalidEndpoint(config.endpoint.clone()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(HttpNetworkingClient {
            config: Config {
                endpoint: endpoint.to_string(),
                ..config.clone()
            },
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.endpoint, path);
        tracing::debug!(%method, %url, "sending request");

        let builder = self
            .http_client
            .request(method, url)
            .header(ACCEPT, "application/json");
        match &self.config.token {
            Some(token) => builder.header(AUTH_TOKEN_HEADER, token),
            None => builder,
        }
    }

    // execute sends the request and returns the body of a 2xx response.
    // Anything else is turned into NeutronError::Http.
    async fn execute(&self, builder: RequestBuilder) -> Result<String, NeutronError> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text, status);
            tracing::debug!(status = status.as_u16(), %message, "request failed");
            return Err(NeutronError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }

    async fn get_object(&self, resource: Resource, path: &str) -> Result<Object, NeutronError> {
        let text = self.execute(self.request(Method::GET, path)).await?;
        into_object(open_envelope(&text, resource.singular())?)
    }

    async fn send_object<T: Serialize + Sync>(
        &self,
        method: Method,
        resource: Resource,
        path: &str,
        body: &T,
    ) -> Result<Object, NeutronError> {
        let text = self
            .execute(self.request(method, path).json(&envelope(resource, body)?))
            .await?;
        into_object(open_envelope(&text, resource.singular())?)
    }

    async fn list_objects(
        &self,
        resource: Resource,
        query: &[(&str, &str)],
    ) -> Result<Vec<Object>, NeutronError> {
        let builder = self
            .request(Method::GET, resource.collection_path())
            .query(query);
        let text = self.execute(builder).await?;
        into_objects(open_envelope(&text, resource.plural())?)
    }
}

#[async_trait]
impl NetworkingClient for HttpNetworkingClient {
    async fn create_interconnection(
        &self,
        body: &InterconnectionCreate,
    ) -> Result<Object, NeutronError> {
        let resource = Resource::Interconnection;
        self.send_object(Method::POST, resource, resource.collection_path(), body)
            .await
    }

    async fn list_interconnections(&self) -> Result<Vec<Object>, NeutronError> {
        self.list_objects(Resource::Interconnection, &[]).await
    }

    async fn show_interconnection(&self, id: &str) -> Result<Object, NeutronError> {
        let resource = Resource::Interconnection;
        self.get_object(resource, &resource.item_path(id)).await
    }

    async fn update_interconnection(
        &self,
        id: &str,
        body: &InterconnectionUpdate,
    ) -> Result<Object, NeutronError> {
        let resource = Resource::Interconnection;
        self.send_object(Method::PUT, resource, &resource.item_path(id), body)
            .await
    }

    async fn delete_interconnection(&self, id: &str) -> Result<(), NeutronError> {
        let path = Resource::Interconnection.item_path(id);
        self.execute(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    async fn find_resource(
        &self,
        resource: Resource,
        name_or_id: &str,
    ) -> Result<Object, NeutronError> {
        match self
            .get_object(resource, &resource.item_path(name_or_id))
            .await
        {
            Ok(object) => return Ok(object),
            Err(e) if e.is_not_found() => {
                tracing::debug!(%resource, name_or_id, "no match by id, trying by name");
            }
            Err(e) => return Err(e),
        }

        let mut matches = self
            .list_objects(resource, &[("name", name_or_id)])
            .await?;
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

fn envelope<T: Serialize>(resource: Resource, body: &T) -> Result<Value, NeutronError> {
    let mut wrapped = Object::new();
    wrapped.insert(resource.singular().to_string(), serde_json::to_value(body)?);
    Ok(Value::Object(wrapped))
}

// open_envelope extracts `key` from a `{"<key>": ...}` response body.
fn open_envelope(text: &str, key: &str) -> Result<Value, NeutronError> {
    let mut body: Object = serde_json::from_str(text)
        .map_err(|e| NeutronError::Serde(format!("Error parsing response body: {}", e)))?;
    body.remove(key)
        .ok_or_else(|| NeutronError::Serde(format!("Response has no '{}' field", key)))
}

fn into_object(value: Value) -> Result<Object, NeutronError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(NeutronError::Serde(format!(
            "Expected a JSON object, got {}",
            other
        ))),
    }
}

fn into_objects(value: Value) -> Result<Vec<Object>, NeutronError> {
    match value {
        Value::Array(items) => items.into_iter().map(into_object).collect(),
        other => Err(NeutronError::Serde(format!(
            "Expected a JSON array, got {}",
            other
        ))),
    }
}

/*
 * Error bodies come in a few shapes:
 *   {"NeutronError": {"type": "...", "message": "...", "detail": ""}}
 *   {"NeutronError": "..."}
 *   {"message": "..."}
 * or plain text from a proxy in front of the service.
 */
fn error_message(text: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(text) {
        let message = match body.get("NeutronError") {
            Some(Value::String(s)) => Some(s.as_str()),
            Some(inner) => inner.get("message").and_then(Value::as_str),
            None => body.get("message").and_then(Value::as_str),
        };
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

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

//! Runs one operation per target, isolating failures so a bad name can't
//! block the rest of the batch.

use std::future::Future;

use neutron_client::Resource;

use crate::errors::{CliError, CliResult};

/// Outcome of a batch run. `failed` holds the targets that failed, in input
/// order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.total - self.failed.len()
    }

    /// Converts the report into the command's result. Any failure makes the
    /// whole command fail with an `X of Y` summary.
    pub fn into_result(self, resource: Resource) -> CliResult<()> {
        if self.failed.is_empty() {
            return Ok(());
        }
        Err(CliError::Command(format!(
            "Failed to delete {} of {} {}.",
            self.failed.len(),
            self.total,
            resource
        )))
    }
}

/// Deletes every target in order. `delete_one` resolves and deletes a
/// single target and returns the id it deleted. Every target is attempted
/// regardless of earlier failures, and nothing is rolled back.
pub async fn delete_each<F, Fut>(
    resource: Resource,
    targets: &[String],
    mut delete_one: F,
) -> BatchReport
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = CliResult<String>>,
{
    let mut report = BatchReport {
        total: targets.len(),
        failed: Vec::new(),
    };

    for name_or_id in targets {
        match delete_one(name_or_id.clone()).await {
            Ok(id) => {
                tracing::warn!("{} {} deleted", resource.title(), id);
            }
            Err(e) => {
                tracing::error!(
                    "Failed to delete {} with name or ID '{}': {}",
                    resource,
                    name_or_id,
                    e
                );
                report.failed.push(name_or_id.clone());
            }
        }
    }

    report
}

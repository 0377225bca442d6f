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

//! Attribute projection tables map the fields of a service response onto
//! display labels, and decide which of them show up in a listing.

use neutron_client::Object;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Listed always.
    Short,
    /// Listed only with `--long`.
    Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub key: &'static str,
    pub label: &'static str,
    pub visibility: Visibility,
}

impl Attribute {
    pub const fn new(key: &'static str, label: &'static str, visibility: Visibility) -> Self {
        Attribute {
            key,
            label,
            visibility,
        }
    }
}

/// Returns the `(keys, labels)` of every table entry present in `object`,
/// in table order. Used to display a single object.
pub fn columns_for(
    object: &Object,
    table: &[Attribute],
) -> (Vec<&'static str>, Vec<&'static str>) {
    table
        .iter()
        .filter(|attr| object.contains_key(attr.key))
        .map(|attr| (attr.key, attr.label))
        .unzip()
}

/// Returns the `(labels, keys)` to list: every short entry, plus the long
/// entries when `long_listing` is set, in table order.
pub fn headers_for(
    table: &[Attribute],
    long_listing: bool,
) -> (Vec<&'static str>, Vec<&'static str>) {
    table
        .iter()
        .filter(|attr| long_listing || attr.visibility == Visibility::Short)
        .map(|attr| (attr.label, attr.key))
        .unzip()
}

/// Picks `keys` out of `object`. Missing keys come back as `None`.
pub fn properties(object: &Object, keys: &[&str]) -> Vec<Option<Value>> {
    keys.iter().map(|key| object.get(*key).cloned()).collect()
}

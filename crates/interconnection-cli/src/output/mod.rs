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

use clap::ValueEnum;
use prettytable::{Cell, Row as TableRow, Table, row};
use serde_json::{Map, Value};
use tokio::io::AsyncWrite;

use crate::async_write::write_flushed;
use crate::errors::CliResult;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    AsciiTable,
    Csv,
    Json,
    Yaml,
}

/// One rendered row; `None` marks a field the server did not return.
pub type Row = Vec<Option<Value>>;

/// What a command hands back for display.
pub enum Output {
    None,
    /// A single object as `(label, value)` pairs.
    ShowOne {
        labels: Vec<&'static str>,
        values: Row,
    },
    /// A listing. `rows` is consumed exactly once while rendering.
    List {
        headers: Vec<&'static str>,
        rows: Box<dyn Iterator<Item = Row>>,
    },
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::None => f.write_str("None"),
            Output::ShowOne { labels, values } => f
                .debug_struct("ShowOne")
                .field("labels", labels)
                .field("values", values)
                .finish(),
            Output::List { headers, .. } => f
                .debug_struct("List")
                .field("headers", headers)
                .finish_non_exhaustive(),
        }
    }
}

pub async fn render<W>(output: Output, format: OutputFormat, writer: &mut W) -> CliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match output {
        Output::None => Ok(()),
        Output::ShowOne { labels, values } => render_one(&labels, values, format, writer).await,
        Output::List { headers, rows } => render_list(&headers, rows, format, writer).await,
    }
}

async fn render_one<W>(
    labels: &[&'static str],
    values: Row,
    format: OutputFormat,
    writer: &mut W,
) -> CliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match format {
        OutputFormat::AsciiTable => {
            let mut table = Table::new();
            table.set_titles(row!["Field", "Value"]);
            for (label, value) in labels.iter().zip(&values) {
                table.add_row(row![label, format_cell(value.as_ref())]);
            }
            write_flushed(writer, table.to_string().as_bytes()).await?;
        }
        OutputFormat::Csv => {
            let mut table = titled_table(labels);
            table.add_row(table_row(&values));
            crate::async_write_table_as_csv!(writer, table)?;
        }
        OutputFormat::Json => {
            let record = record(labels, values);
            crate::async_writeln!(writer, "{}", serde_json::to_string_pretty(&record)?)?;
        }
        OutputFormat::Yaml => {
            let record = record(labels, values);
            write_flushed(writer, serde_yaml::to_string(&record)?.as_bytes()).await?;
        }
    }
    Ok(())
}

async fn render_list<W>(
    headers: &[&'static str],
    rows: Box<dyn Iterator<Item = Row>>,
    format: OutputFormat,
    writer: &mut W,
) -> CliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match format {
        OutputFormat::AsciiTable => {
            let mut table = titled_table(headers);
            for values in rows {
                table.add_row(table_row(&values));
            }
            write_flushed(writer, table.to_string().as_bytes()).await?;
        }
        OutputFormat::Csv => {
            let mut table = titled_table(headers);
            for values in rows {
                table.add_row(table_row(&values));
            }
            crate::async_write_table_as_csv!(writer, table)?;
        }
        OutputFormat::Json => {
            let records: Vec<_> = rows.map(|values| record(headers, values)).collect();
            crate::async_writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
        }
        OutputFormat::Yaml => {
            let records: Vec<_> = rows.map(|values| record(headers, values)).collect();
            write_flushed(writer, serde_yaml::to_string(&records)?.as_bytes()).await?;
        }
    }
    Ok(())
}

fn titled_table(labels: &[&'static str]) -> Table {
    let mut table = Table::new();
    table.set_titles(TableRow::new(labels.iter().map(|l| Cell::new(l)).collect()));
    table
}

fn table_row(values: &[Option<Value>]) -> TableRow {
    TableRow::new(
        values
            .iter()
            .map(|v| Cell::new(&format_cell(v.as_ref())))
            .collect(),
    )
}

// record keys a row by its labels, keeping label order.
fn record(labels: &[&'static str], values: Row) -> Map<String, Value> {
    labels
        .iter()
        .zip(values)
        .map(|(label, value)| (label.to_string(), value.unwrap_or(Value::Null)))
        .collect()
}

/// Formats a value for a table cell. Mappings render as
/// `key='value', ...` sorted by key, lists are comma separated, and
/// missing or null values are blank.
pub fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(map)) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            entries
                .into_iter()
                .map(|(k, v)| format!("{}='{}'", k, format_cell(Some(v))))
                .collect::<Vec<_>>()
                .join(", ")
        }
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| format_cell(Some(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

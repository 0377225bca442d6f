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

use tokio::io::{AsyncWrite, AsyncWriteExt};

// write_flushed writes all of `bytes` and flushes, so output interleaves
// correctly with log lines on a terminal.
pub async fn write_flushed<W>(writer: &mut W, bytes: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    writer.write_all(bytes).await?;
    writer.flush().await
}

/// Macro for writing formatted output with a newline to a tokio::io::AsyncWrite object
/// Similar to writeln! but for async writers
/// $writer must be a `&mut` to an AsyncWrite + Unpin
#[macro_export]
macro_rules! async_writeln {
    ($writer:expr, $($arg:tt)+) => {{
        let mut formatted = format!($($arg)+);
        formatted.push('\n');
        $crate::async_write::write_flushed($writer, formatted.as_bytes()).await
    }};
}

/// Macro for writing a prettytable table as csv to a tokio::io::AsyncWrite object
/// $writer must be a `&mut` to an AsyncWrite + Unpin
#[macro_export]
macro_rules! async_write_table_as_csv {
    ($writer:expr, $table:expr) => {{
        let mut output = Vec::default();
        $table
            .to_csv(&mut output)
            .map_err(|e| $crate::errors::CliError::GenericError(e.to_string()))?;
        $crate::async_write::write_flushed($writer, output.as_slice()).await
    }};
}

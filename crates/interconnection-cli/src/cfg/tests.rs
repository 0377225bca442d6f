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

// The intent of the tests.rs file is to test the integrity of the
// top-level command, global option parsing, and how configuration
// sources are merged.
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure global options parse correctly.
// Config Merging    - Flags and env win over the config file.

use clap::{CommandFactory, Parser};
use temp_dir::TempDir;

use super::cli_options::{CliCommand, CliOptions};
use super::file::{FileConfig, client_config};
use crate::errors::CliError;
use crate::output::OutputFormat;

// verify_cmd_structure runs a baseline clap debug_assert()
// over the whole CLI, including every flattened subcommand.
#[test]
fn verify_cmd_structure() {
    CliOptions::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_global_options_after_subcommand ensures global
// options are accepted after the subcommand.
#[test]
fn parse_global_options_after_subcommand() {
    let opts = CliOptions::try_parse_from([
        "interconnection-cli",
        "list",
        "--os-url",
        "http://neutron:9696",
        "--format",
        "json",
        "--timeout",
        "5",
    ])
    .expect("should parse list with global options");

    assert_eq!(opts.os_url.as_deref(), Some("http://neutron:9696"));
    assert_eq!(opts.format, OutputFormat::Json);
    assert_eq!(opts.timeout, Some(5));
    assert!(matches!(opts.commands, CliCommand::Interconnection(_)));
}

// parse_default_format ensures the table format is the default.
#[test]
fn parse_default_format() {
    let opts = CliOptions::try_parse_from(["interconnection-cli", "list"])
        .expect("should parse list");
    assert_eq!(opts.format, OutputFormat::AsciiTable);
}

// parse_invalid_format_fails ensures unknown formats are rejected.
#[test]
fn parse_invalid_format_fails() {
    let result = CliOptions::try_parse_from(["interconnection-cli", "list", "--format", "xml"]);
    assert!(result.is_err(), "should fail with unknown format");
}

// parse_shell_complete ensures the completion command is wired in.
#[test]
fn parse_shell_complete() {
    let opts =
        CliOptions::try_parse_from(["interconnection-cli", "generate-shell-complete", "zsh"])
            .expect("should parse generate-shell-complete");
    assert!(matches!(
        opts.commands,
        CliCommand::GenerateShellComplete(_)
    ));
}

/////////////////////////////////////////////////////////////////////////////
// Config Merging

fn options(args: &[&str]) -> CliOptions {
    let mut argv = vec!["interconnection-cli"];
    argv.extend_from_slice(args);
    argv.push("list");
    CliOptions::try_parse_from(argv).expect("should parse options")
}

#[test]
fn flags_override_config_file() {
    let file = FileConfig {
        url: Some("http://from-file:9696".to_string()),
        token: Some("file-token".to_string()),
        timeout_secs: Some(7),
    };
    let opts = options(&[
        "--os-url",
        "http://from-flag:9696",
        "--os-token",
        "flag-token",
        "--timeout",
        "3",
    ]);

    let config = client_config(&opts, &file).expect("config should resolve");
    assert_eq!(config.endpoint, "http://from-flag:9696");
    assert_eq!(config.token.as_deref(), Some("flag-token"));
    assert_eq!(config.timeout_secs, 3);
}

#[test]
fn config_file_fills_unset_options() {
    let file = FileConfig {
        url: Some("http://from-file:9696".to_string()),
        token: None,
        timeout_secs: None,
    };
    let opts = options(&["--os-url", "http://from-flag:9696"]);

    let config = client_config(&opts, &file).expect("config should resolve");
    assert_eq!(config.endpoint, "http://from-flag:9696");
    assert_eq!(config.timeout_secs, neutron_client::DEFAULT_TIMEOUT_SECS);
}

#[test]
fn load_reads_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("config.toml");
    std::fs::write(
        &path,
        "url = \"http://neutron:9696\"\ntoken = \"t\"\ntimeout_secs = 9\n",
    )
    .unwrap();

    let file = FileConfig::load(Some(path.as_path())).expect("config should load");
    assert_eq!(
        file,
        FileConfig {
            url: Some("http://neutron:9696".to_string()),
            token: Some("t".to_string()),
            timeout_secs: Some(9),
        }
    );
}

#[test]
fn load_rejects_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("config.toml");
    std::fs::write(&path, "endpoint = \"http://neutron:9696\"\n").unwrap();

    let err = FileConfig::load(Some(path.as_path())).expect_err("unknown keys should fail");
    assert!(matches!(err, CliError::ConfigFileError { .. }));
}

#[test]
fn load_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = FileConfig::load(Some(dir.child("absent.toml").as_path()))
        .expect_err("missing explicit file should fail");
    assert!(matches!(err, CliError::IOError(_)));
}

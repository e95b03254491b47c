// ABOUTME: Command modules for desi-cli
// ABOUTME: Planning, preference and catalog subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

pub mod catalog;
pub mod planning;
pub mod preferences;

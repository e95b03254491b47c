// ABOUTME: Helper modules for desi-cli
// ABOUTME: Text and JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

pub mod display;

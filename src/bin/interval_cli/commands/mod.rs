// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for interval-laps
// ABOUTME: Provides the tag, summary, and config subcommands

pub mod config;
pub mod summary;
pub mod tag;

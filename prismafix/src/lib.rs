//! Core library for prismafix, a one-shot codemod for Prisma-backed
//! TypeScript API routes.
//!
//! It removes enum imports from `@prisma/client`, replaces `Enum.VALUE`
//! tokens with string literals and adds explicit `: any` annotations to
//! bare callback parameters. All matching is textual.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module containing the codemod run and its report.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and the built-in rule tables.
pub mod constants;

/// Module defining the shared entry point used by every binary.
pub mod entry_point;

/// Module containing the byte-range edit engine.
pub mod fix;

/// Module for console output.
pub mod output;

/// Module containing the rewrite rules and rule groups.
pub mod rules;

/// Module containing utility functions (paths, discovery).
pub mod utils;

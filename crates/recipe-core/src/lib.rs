// ABOUTME: Core types and constants for the recipe proxy service
// ABOUTME: Foundation crate with the recipe model, tagged lookup results, and HTTP errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate shared by the recipe proxy library, its binaries, and
//! its tests. It changes rarely, so keeping it apart from the service crate
//! keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **errors**: `LookupError` for outbound calls, `AppError`/`ErrorCode` for the HTTP boundary
//! - **models**: request-scoped recipe and ingredient types
//! - **constants**: user-visible messages, provider names, and defaults

/// Tagged lookup results and the unified HTTP error type
pub mod errors;

/// Recipe, ingredient, and nutrition data model
pub mod models;

/// Application constants organized by domain
pub mod constants;

//! # Lible Backend
//!
//! School bell scheduling engine.
//!
//! This crate provides the backend for the Lible school bell system: it stores
//! timetables, event templates, holidays and sound references, and resolves,
//! for any calendar date, the exact ordered sequence of bell firing
//! instructions for that day. The backend exposes a REST API via Axum for the
//! web frontend.
//!
//! ## Features
//!
//! - **Timetable Management**: Per-user timetables with validity windows and
//!   weekday bitmasks, each owning a list of bell events
//! - **Event Templates**: Named sets of minute offsets that expand into
//!   concrete events relative to an anchor time
//! - **Holiday Calendar**: System-wide date intervals that suppress all bells
//! - **Schedule Resolution**: Pure, deterministic computation of the firing
//!   plan for one (user, date) pair, with conflict resolution between
//!   overlapping timetables
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes shared across all layers
//! - [`models`]: Validated domain entities (timetables, templates, holidays,
//!   sounds, users)
//! - [`resolver`]: The resolution engine — timetable matcher, template
//!   expander, holiday calendar, conflict policy and the resolver itself
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`services`]: High-level business logic on top of the repository
//! - [`http`]: Axum-based HTTP server and request handlers
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod resolver;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;

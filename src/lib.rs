//! Memorizer: a ledger for paid work shifts and out-of-queue song requests.
//!
//! This crate prices shifts and songs when they are recorded, stores them in
//! SQLite, and exposes lifetime earnings, the current unpaid balance and a
//! payout operation over a JSON REST API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod shutdown;
pub mod store;

//! # HealthStats
//!
//! Lexical statistics for biomedical text, compared against a baseline
//! computed from PubMed abstracts.
//!
//! The pure analysis lives in [`healthstats_core`]; this crate adds the
//! production pieces around it: a CSV-file baseline backend, the PubMed
//! corpus fetcher, the build-once baseline store, and the HTTP and CLI
//! surfaces.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌─────────────┐
//! │  PubMed  │──▶│ BaselineStore │──▶│  CSV file   │
//! │ fetcher  │   │ (build once)  │   │ (baseline)  │
//! └──────────┘   └───────┬───────┘   └─────────────┘
//!                        │
//!                ┌───────▼──────────┐
//!                │ComparisonService │
//!                └───────┬──────────┘
//!              ┌─────────┴─────────┐
//!              ▼                   ▼
//!         ┌──────────┐       ┌──────────┐
//!         │   CLI    │       │   HTTP   │
//!         │ (hstats) │       │  (axum)  │
//!         └──────────┘       └──────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`csv_store`] | CSV-file baseline backend |
//! | [`pubmed`] | PubMed reference corpus source |
//! | [`baseline`] | Load-or-build baseline store |
//! | [`service`] | Comparison service and production wiring |
//! | [`server`] | HTTP server |
//! | [`commands`] | CLI command implementations |

pub mod baseline;
pub mod commands;
pub mod config;
pub mod csv_store;
pub mod pubmed;
pub mod server;
pub mod service;

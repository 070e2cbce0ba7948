//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic lending library core**. The crate tracks a small
//! library's book inventory, registered patrons, and loan log for one
//! in-memory session; the interactive shell is just one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, runs the menu loop, renders output     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user-facing operation                     │
//! │  - Turns catalog outcomes into renderable CmdResults        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (catalog.rs + model.rs)                             │
//! │  - Catalog: the aggregate owning books, patrons, loan log   │
//! │  - Book/Patron link each other by key, never by reference   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, **never** writes to stdout/stderr, **never** calls
//! `std::process::exit`, and **never** assumes a terminal. Every failure a
//! patron can cause (duplicate keys, unknown keys, borrow conflicts, limit
//! hits) is an ordinary, typed outcome: deterministic and non-fatal.
//!
//! ## The Book/Patron Link
//!
//! A lent book knows its borrower and the borrower knows their books, which
//! is a small cycle. Rather than shared mutable references, both sides store the
//! other's *key* (card id / ISBN) and only [`catalog::Catalog`] may flip
//! them, always together. See `catalog.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: One module per operation, returning [`commands::CmdResult`]
//! - [`catalog`]: The aggregate root and its transactional lending ops
//! - [`model`]: Core data types (`Book`, `Patron`, `LoanRecord`)
//! - [`config`]: Session configuration (library name, borrow limit)
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;

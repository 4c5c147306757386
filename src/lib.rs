//! # connectx
//!
//! Move resolution for a cascading Connect Four variant. Dropping a piece can
//! complete four-in-a-row runs; completed runs are cleared, scored, and the
//! pieces above them fall, possibly completing new runs, until the board is
//! stable.
//!
//! ## Modules
//!
//! - [`game`] — Board, markers, run detection, gravity, and the settle loop
//! - [`api`] — JSON move request/response boundary and request routing
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod api;
pub mod config;
pub mod error;
pub mod game;

//! rota-core — daily duty rotation for a small team.
//!
//! Selects up to two people for the help desk, distributes two
//! operations tasks to everyone else while avoiding yesterday's
//! repeats, and (on scheduled days) picks onboarding support. The
//! result is rendered once and handed to a delivery sink; the only
//! state that survives a run is a two-deep selection history.

pub mod assigner;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod history;
pub mod message;
pub mod onboarding;
pub mod rng;
pub mod run;
pub mod schedule;
pub mod selector;
pub mod sink;
pub mod types;

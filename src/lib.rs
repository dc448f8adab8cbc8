//! Pulseboard - Live Event Intelligence Dashboard Client
//!
//! This crate implements the client side of a streaming dashboard for
//! infrastructure and CI/CD events: a resilient WebSocket synchronization
//! core, bounded display buffers, running session stats, and an outbound
//! gateway for manual event submission and scenario triggers.

pub mod api;
pub mod config;
pub mod domain;
pub mod stream;

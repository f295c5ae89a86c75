//! Core types shared across dumpalign facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! error and logging facilities, so every crate in the workspace emits the
//! same structured shape.

pub mod schema;

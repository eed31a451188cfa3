//! Core types and definitions for the corridor walk.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, state snapshots, events, configuration and constants.
//! It has no dependency on any windowing, rendering or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

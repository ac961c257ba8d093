//! postboard: a terminal client for a hosted JSON posts collection.
//!
//! The session keeps an in-memory copy of the remote posts, derives a
//! searchable newest-first view from it, and forwards create/delete requests
//! to the remote API before touching local state.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

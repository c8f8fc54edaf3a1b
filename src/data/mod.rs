//! Core data models for userfetch
//!
//! This module contains the normalized user record handed out to callers,
//! distinct from the raw payload returned by the upstream API.

pub mod user;

pub use user::Record;

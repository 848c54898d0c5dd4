//! Networking modules for the login mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` runs the login request and persists the session, `graphql` builds
//! and decodes the mutation envelopes, and `types` defines the shared DTOs.

pub mod auth;
pub mod graphql;
pub mod types;

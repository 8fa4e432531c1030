//! Shared registry plumbing for the health identity contracts.
//!
//! This crate provides:
//! - [`RegistryError`]: the wire-level error codes returned by every registry.
//! - [`registry`]: the record store and ownership index keyspace, including
//!   the single create-and-bind transaction.
//! - [`guard`]: the deployment-time admin configuration and its check.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod guard;
pub mod registry;

pub use guard::{get_admin, require_admin};
pub use registry::Keyspace;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes shared by the patient and provider registries.
///
/// The discriminants are the literal codes existing callers match on and
/// must not be renumbered.
///
/// # Codes
/// | Code | Meaning                                   |
/// |------|-------------------------------------------|
/// | 401  | Caller is not allowed to do this          |
/// | 403  | Record id is already taken                |
/// | 404  | Record id does not exist                  |
/// | 409  | Principal already owns a different record |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum RegistryError {
    /// The caller is not the configured admin, or not the owner of the
    /// record it tries to mutate.
    Unauthorized = 401,

    /// A record with the supplied id already exists.
    AlreadyExists = 403,

    /// No record with the supplied id exists.
    NotFound = 404,

    /// The calling principal is already bound to another record.
    Conflict = 409,
}

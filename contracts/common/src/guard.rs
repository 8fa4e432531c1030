use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::registry::extend_instance_ttl;
use crate::RegistryError;

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");

// ── Admin configuration ──────────────────────────────────────────────────────

/// Stores the admin principal.
///
/// Must only be called from a contract's `__constructor`; no entry point may
/// forward to it, which keeps the admin fixed for the life of the deployment.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
    extend_instance_ttl(env);
}

/// Returns the configured admin, if the contract was constructed with one.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

/// Guard: only the configured admin may perform privileged transitions.
///
/// A contract with no admin configured authorizes nobody.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    match get_admin(env) {
        Some(admin) if admin == *caller => Ok(()),
        _ => Err(RegistryError::Unauthorized),
    }
}

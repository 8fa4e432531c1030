//! Record store and ownership index shared by both registries.
//!
//! Each registry owns one [`Keyspace`]: record entries live under
//! `(records, id)` and ownership entries under `(owners, principal)`.
//! Entries are never removed, so an id or principal that is present once
//! stays present for the life of the contract.

use soroban_sdk::{Address, Env, IntoVal, String, Symbol, TryFromVal, Val};

use crate::RegistryError;

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Keyspace ─────────────────────────────────────────────────────────────────

/// Storage prefixes for one registry's two coupled maps.
#[derive(Clone, Debug)]
pub struct Keyspace {
    /// Prefix of `RecordId -> Record` entries.
    pub records: Symbol,
    /// Prefix of `Principal -> RecordId` entries.
    pub owners: Symbol,
}

impl Keyspace {
    fn record_key(&self, id: &String) -> (Symbol, String) {
        (self.records.clone(), id.clone())
    }

    fn owner_key(&self, owner: &Address) -> (Symbol, Address) {
        (self.owners.clone(), owner.clone())
    }
}

fn extend_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the instance storage TTL (admin configuration lives there).
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Reads ────────────────────────────────────────────────────────────────────

/// Returns `true` if a record with `id` exists.
pub fn contains(env: &Env, keyspace: &Keyspace, id: &String) -> bool {
    env.storage().persistent().has(&keyspace.record_key(id))
}

/// Loads the current snapshot of record `id`, if any.
pub fn load<V>(env: &Env, keyspace: &Keyspace, id: &String) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: core::fmt::Debug,
{
    env.storage().persistent().get(&keyspace.record_key(id))
}

/// Returns the record id bound to `owner`, if any.
pub fn lookup(env: &Env, keyspace: &Keyspace, owner: &Address) -> Option<String> {
    env.storage().persistent().get(&keyspace.owner_key(owner))
}

// ── Writes ───────────────────────────────────────────────────────────────────

/// Inserts a new record and binds it to `owner` as one state transition.
///
/// Both preconditions are checked before anything is written, so a failed
/// call leaves neither an unbound record nor an orphaned ownership entry.
///
/// # Errors
/// - [`RegistryError::AlreadyExists`] if `id` is already taken.
/// - [`RegistryError::Conflict`] if `owner` is already bound to a record.
pub fn insert_bound<V>(
    env: &Env,
    keyspace: &Keyspace,
    owner: &Address,
    id: &String,
    record: &V,
) -> Result<(), RegistryError>
where
    V: IntoVal<Env, Val>,
{
    let record_key = keyspace.record_key(id);
    let owner_key = keyspace.owner_key(owner);
    let storage = env.storage().persistent();

    if storage.has(&record_key) {
        return Err(RegistryError::AlreadyExists);
    }
    if storage.has(&owner_key) {
        return Err(RegistryError::Conflict);
    }

    storage.set(&record_key, record);
    storage.set(&owner_key, id);
    extend_ttl(env, &record_key);
    extend_ttl(env, &owner_key);

    Ok(())
}

/// Overwrites an existing record with a new snapshot.
///
/// Callers load the record first, so `id` is known to exist and its
/// ownership entry is left untouched.
pub fn replace<V>(env: &Env, keyspace: &Keyspace, id: &String, record: &V)
where
    V: IntoVal<Env, Val>,
{
    let key = keyspace.record_key(id);
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);
}

/// Guard: `caller` must be the principal bound to record `id`.
///
/// On success the ownership entry's TTL is extended along with the record
/// the caller is about to rewrite, so the binding never expires first.
pub fn require_owner(
    env: &Env,
    keyspace: &Keyspace,
    caller: &Address,
    id: &String,
) -> Result<(), RegistryError> {
    match lookup(env, keyspace, caller) {
        Some(owned) if owned == *id => {
            extend_ttl(env, &keyspace.owner_key(caller));
            Ok(())
        }
        _ => Err(RegistryError::Unauthorized),
    }
}

#![no_std]

pub mod events;

use common::guard;
use common::registry::{self, Keyspace};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, String};

pub use common::RegistryError;

// ── Storage keys ─────────────────────────────────────────────────────────────

const PROVIDERS: Keyspace = Keyspace {
    records: symbol_short!("PROVIDER"),
    owners: symbol_short!("PRV_OWN"),
};

// ── Types ────────────────────────────────────────────────────────────────────

/// Healthcare provider record.
///
/// `is_verified` starts `false` and can only be raised by the admin through
/// `verify_provider`; nothing lowers it again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Provider {
    pub name: String,
    pub specialty: String,
    pub license_number: String,
    pub is_verified: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct ProviderVerificationContract;

#[contractimpl]
impl ProviderVerificationContract {
    /// Deploy the registry with its admin. The admin cannot be changed later.
    pub fn __constructor(env: Env, admin: Address) {
        guard::set_admin(&env, &admin);
    }

    /// Get the admin address fixed at deployment.
    ///
    /// Always `Some` for a deployed contract, since `__constructor` sets it.
    /// `None` is only observable when the code runs without its constructor.
    pub fn get_admin(env: Env) -> Option<Address> {
        guard::get_admin(&env)
    }

    /// Register a provider and bind it to `caller`. New providers are unverified.
    pub fn register_provider(
        env: Env,
        caller: Address,
        provider_id: String,
        name: String,
        specialty: String,
        license_number: String,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let provider = Provider {
            name,
            specialty,
            license_number,
            is_verified: false,
            created_at: now,
            updated_at: now,
        };

        registry::insert_bound(&env, &PROVIDERS, &caller, &provider_id, &provider)?;
        registry::extend_instance_ttl(&env);

        events::publish_provider_registered(&env, provider_id, caller);

        Ok(())
    }

    /// Replace a provider's name, specialty and license number.
    /// Only the owning principal may update; the verification flag is kept.
    pub fn update_provider(
        env: Env,
        caller: Address,
        provider_id: String,
        name: String,
        specialty: String,
        license_number: String,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let current: Provider =
            registry::load(&env, &PROVIDERS, &provider_id).ok_or(RegistryError::NotFound)?;
        registry::require_owner(&env, &PROVIDERS, &caller, &provider_id)?;

        let provider = Provider {
            name,
            specialty,
            license_number,
            updated_at: env.ledger().timestamp(),
            ..current
        };
        registry::replace(&env, &PROVIDERS, &provider_id, &provider);

        events::publish_provider_updated(&env, provider_id);

        Ok(())
    }

    /// Mark a provider as verified. Admin only.
    ///
    /// Authorization is checked before existence. Repeating the call on a
    /// verified provider succeeds and only refreshes `updated_at`.
    pub fn verify_provider(
        env: Env,
        caller: Address,
        provider_id: String,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        guard::require_admin(&env, &caller)?;

        let mut provider: Provider =
            registry::load(&env, &PROVIDERS, &provider_id).ok_or(RegistryError::NotFound)?;

        provider.is_verified = true;
        provider.updated_at = env.ledger().timestamp();
        registry::replace(&env, &PROVIDERS, &provider_id, &provider);

        events::publish_provider_verified(&env, provider_id, caller);

        Ok(())
    }

    /// Check whether a provider is verified. Unknown ids are reported as unverified.
    pub fn is_verified_provider(env: Env, provider_id: String) -> bool {
        registry::load::<Provider>(&env, &PROVIDERS, &provider_id)
            .map(|provider| provider.is_verified)
            .unwrap_or(false)
    }

    /// Get the current snapshot of a provider record.
    pub fn get_provider(env: Env, provider_id: String) -> Option<Provider> {
        registry::load(&env, &PROVIDERS, &provider_id)
    }

    /// Get the provider id owned by `owner`, if any.
    pub fn get_provider_id_by_principal(env: Env, owner: Address) -> Option<String> {
        registry::lookup(&env, &PROVIDERS, &owner)
    }
}

use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when a provider is registered and bound to its owner.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRegisteredEvent {
    pub provider_id: String,
    pub owner: Address,
    pub timestamp: u64,
}

/// Event published when provider information is updated.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderUpdatedEvent {
    pub provider_id: String,
    pub timestamp: u64,
}

/// Event published when the admin verifies a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderVerifiedEvent {
    pub provider_id: String,
    pub verifier: Address,
    pub timestamp: u64,
}

/// Publishes an event when a new provider is registered.
/// This event includes the provider id, owning principal, and timestamp.
pub fn publish_provider_registered(env: &Env, provider_id: String, owner: Address) {
    let topics = (symbol_short!("PRV_REG"), owner.clone());
    let data = ProviderRegisteredEvent {
        provider_id,
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_provider_updated(env: &Env, provider_id: String) {
    let topics = (symbol_short!("PRV_UPD"),);
    let data = ProviderUpdatedEvent {
        provider_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider is verified. Emitted on every
/// successful `verify_provider`, including repeats on a verified record.
pub fn publish_provider_verified(env: &Env, provider_id: String, verifier: Address) {
    let topics = (symbol_short!("PRV_VER"), verifier.clone());
    let data = ProviderVerifiedEvent {
        provider_id,
        verifier,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

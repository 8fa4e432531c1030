use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when a patient record is created and bound to its owner.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientCreatedEvent {
    pub patient_id: String,
    pub owner: Address,
    pub timestamp: u64,
}

/// Event published when a patient's mutable fields are replaced.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientUpdatedEvent {
    pub patient_id: String,
    pub timestamp: u64,
}

/// Publishes an event when a new patient record is created.
/// Topics carry the owning principal so indexers can follow a single owner.
pub fn publish_patient_created(env: &Env, patient_id: String, owner: Address) {
    let topics = (symbol_short!("PAT_NEW"), owner.clone());
    let data = PatientCreatedEvent {
        patient_id,
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_updated(env: &Env, patient_id: String) {
    let topics = (symbol_short!("PAT_UPD"),);
    let data = PatientUpdatedEvent {
        patient_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

#![no_std]

pub mod events;

use common::registry::{self, Keyspace};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, String};

pub use common::RegistryError;

// ── Storage keys ─────────────────────────────────────────────────────────────

const PATIENTS: Keyspace = Keyspace {
    records: symbol_short!("PATIENT"),
    owners: symbol_short!("PAT_OWN"),
};

// ── Types ────────────────────────────────────────────────────────────────────

/// Patient identity record.
///
/// `dob` and `created_at` are fixed at creation; every other field is
/// replaced wholesale by `update_patient`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub name: String,
    pub dob: String,
    pub blood_type: String,
    pub allergies: String,
    pub emergency_contact: String,
    pub created_at: u64,
    pub updated_at: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct PatientIdentityContract;

#[contractimpl]
impl PatientIdentityContract {
    /// Create a patient record and bind it to `caller`.
    ///
    /// Fails with `AlreadyExists` if the id is taken and with `Conflict` if
    /// `caller` already owns a patient record.
    #[allow(clippy::too_many_arguments)]
    pub fn create_patient(
        env: Env,
        caller: Address,
        patient_id: String,
        name: String,
        dob: String,
        blood_type: String,
        allergies: String,
        emergency_contact: String,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let patient = Patient {
            name,
            dob,
            blood_type,
            allergies,
            emergency_contact,
            created_at: now,
            updated_at: now,
        };

        registry::insert_bound(&env, &PATIENTS, &caller, &patient_id, &patient)?;
        registry::extend_instance_ttl(&env);

        events::publish_patient_created(&env, patient_id, caller);

        Ok(())
    }

    /// Replace the mutable fields of an existing patient record.
    /// Only the owning principal may update; `dob` is preserved.
    pub fn update_patient(
        env: Env,
        caller: Address,
        patient_id: String,
        name: String,
        blood_type: String,
        allergies: String,
        emergency_contact: String,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let current: Patient =
            registry::load(&env, &PATIENTS, &patient_id).ok_or(RegistryError::NotFound)?;
        registry::require_owner(&env, &PATIENTS, &caller, &patient_id)?;

        let patient = Patient {
            name,
            blood_type,
            allergies,
            emergency_contact,
            updated_at: env.ledger().timestamp(),
            ..current
        };
        registry::replace(&env, &PATIENTS, &patient_id, &patient);

        events::publish_patient_updated(&env, patient_id);

        Ok(())
    }

    /// Get the current snapshot of a patient record.
    pub fn get_patient(env: Env, patient_id: String) -> Option<Patient> {
        registry::load(&env, &PATIENTS, &patient_id)
    }

    /// Get the patient id owned by `owner`, if any.
    pub fn get_patient_id_by_principal(env: Env, owner: Address) -> Option<String> {
        registry::lookup(&env, &PATIENTS, &owner)
    }
}

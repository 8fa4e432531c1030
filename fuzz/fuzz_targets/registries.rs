#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use patient_identity::{PatientIdentityContract, PatientIdentityContractClient};
use provider_verification::{ProviderVerificationContract, ProviderVerificationContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, String,
};

const PRINCIPALS: usize = 4;
const IDS: usize = 4;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    CreatePatient { principal: u8, id: u8 },
    UpdatePatient { principal: u8, id: u8 },
    RegisterProvider { principal: u8, id: u8 },
    UpdateProvider { principal: u8, id: u8 },
    VerifyProvider { as_admin: bool, principal: u8, id: u8 },
    AdvanceTime { seconds: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let patients_id = env.register(PatientIdentityContract, ());
    let patients = PatientIdentityContractClient::new(&env, &patients_id);
    let providers_id = env.register(ProviderVerificationContract, (admin.clone(),));
    let providers = ProviderVerificationContractClient::new(&env, &providers_id);

    let users: Vec<Address> = (0..PRINCIPALS).map(|_| Address::generate(&env)).collect();
    let ids: Vec<String> = (0..IDS)
        .map(|i| String::from_str(&env, &format!("rec-{i}")))
        .collect();
    let text = String::from_str(&env, "x");

    let mut now = 0u64;
    let mut verified = [false; IDS];

    // Errors are expected; we are looking for panics and invariant breaks.
    for action in actions {
        match action {
            FuzzAction::CreatePatient { principal, id } => {
                let _ = patients.try_create_patient(
                    &users[principal as usize % PRINCIPALS],
                    &ids[id as usize % IDS],
                    &text,
                    &text,
                    &text,
                    &text,
                    &text,
                );
            }
            FuzzAction::UpdatePatient { principal, id } => {
                let _ = patients.try_update_patient(
                    &users[principal as usize % PRINCIPALS],
                    &ids[id as usize % IDS],
                    &text,
                    &text,
                    &text,
                    &text,
                );
            }
            FuzzAction::RegisterProvider { principal, id } => {
                let _ = providers.try_register_provider(
                    &users[principal as usize % PRINCIPALS],
                    &ids[id as usize % IDS],
                    &text,
                    &text,
                    &text,
                );
            }
            FuzzAction::UpdateProvider { principal, id } => {
                let _ = providers.try_update_provider(
                    &users[principal as usize % PRINCIPALS],
                    &ids[id as usize % IDS],
                    &text,
                    &text,
                    &text,
                );
            }
            FuzzAction::VerifyProvider { as_admin, principal, id } => {
                let caller = if as_admin {
                    &admin
                } else {
                    &users[principal as usize % PRINCIPALS]
                };
                let result = providers.try_verify_provider(caller, &ids[id as usize % IDS]);
                assert!(as_admin || result.is_err(), "non-admin verified a provider");
            }
            FuzzAction::AdvanceTime { seconds } => {
                now = now.saturating_add(u64::from(seconds));
                env.ledger().set_timestamp(now);
            }
        }

        for (i, id) in ids.iter().enumerate() {
            let is_verified = providers.is_verified_provider(id);
            assert!(is_verified || !verified[i], "verification was reverted");
            verified[i] = is_verified;

            if let Some(patient) = patients.get_patient(id) {
                assert!(patient.created_at <= patient.updated_at);
            }
        }

        // Ownership stays 1:1 in both registries.
        for (a, user_a) in users.iter().enumerate() {
            for user_b in users.iter().skip(a + 1) {
                let pa = patients.get_patient_id_by_principal(user_a);
                if pa.is_some() {
                    assert_ne!(pa, patients.get_patient_id_by_principal(user_b));
                }
                let va = providers.get_provider_id_by_principal(user_a);
                if va.is_some() {
                    assert_ne!(va, providers.get_provider_id_by_principal(user_b));
                }
            }
        }
    }
});

//! Residence and resident registry.
//!
//! Residences are implicit: a code exists iff it decodes inside the scheme
//! in [`crate::config`]. Residents are stored one record per address.

use soroban_sdk::{Address, Env};

use condominium_interface::{is_null_address, Error, Resident};

use crate::config::{BLOCKS, FLOORS, UNITS};
use crate::events;
use crate::rbac::{self, Permission};
use crate::storage;

/// Whether `residence_id` is a valid `block·1000 + floor·100 + unit` code.
pub fn residence_exists(residence_id: u32) -> bool {
    let block = residence_id / 1000;
    let floor = (residence_id % 1000) / 100;
    let unit = residence_id % 100;
    (1..=BLOCKS).contains(&block) && (1..=FLOORS).contains(&floor) && (1..=UNITS).contains(&unit)
}

pub fn is_resident(env: &Env, address: &Address) -> bool {
    storage::load_resident(env, address).is_some()
}

pub fn residence_of(env: &Env, address: &Address) -> Option<u32> {
    storage::load_resident(env, address).map(|r| r.residence_id)
}

pub fn is_counselor(env: &Env, address: &Address) -> bool {
    storage::load_resident(env, address).is_some_and(|r| r.is_counselor)
}

/// Register `resident` at `residence_id`, replacing any previous record of
/// that address. The counselor flag survives a move.
pub fn add_resident(
    env: &Env,
    caller: &Address,
    resident: &Address,
    residence_id: u32,
) -> Result<(), Error> {
    rbac::require(env, caller, Permission::ManagerOrCounselor)?;
    if !residence_exists(residence_id) {
        return Err(Error::InvalidResidence);
    }
    if is_null_address(env, resident) {
        return Err(Error::InvalidAddress);
    }

    let is_counselor = is_counselor(env, resident);
    storage::save_resident(
        env,
        &Resident {
            address: resident.clone(),
            residence_id,
            is_counselor,
            registered_at: env.ledger().timestamp(),
        },
    );
    events::resident_added(env, resident, residence_id);
    Ok(())
}

/// Delete the record of `resident`. Unknown addresses are a no-op.
pub fn remove_resident(env: &Env, caller: &Address, resident: &Address) -> Result<(), Error> {
    rbac::require(env, caller, Permission::OnlyManager)?;
    let Some(record) = storage::load_resident(env, resident) else {
        return Ok(());
    };
    if record.is_counselor {
        return Err(Error::ResidentIsCounselor);
    }

    storage::remove_resident(env, resident);
    events::resident_removed(env, resident, record.residence_id);
    Ok(())
}

pub fn set_counselor(
    env: &Env,
    caller: &Address,
    resident: &Address,
    enabled: bool,
) -> Result<(), Error> {
    rbac::require(env, caller, Permission::OnlyManager)?;
    if is_null_address(env, resident) {
        return Err(Error::InvalidAddress);
    }
    let mut record = storage::load_resident(env, resident).ok_or(Error::NotAResident)?;

    record.is_counselor = enabled;
    storage::save_resident(env, &record);
    events::counselor_set(env, resident, enabled);
    Ok(())
}

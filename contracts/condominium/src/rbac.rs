//! # Role-Based Access Control
//!
//! Roles are never stored. They are derived on every call from two sources:
//!
//! - the manager address held in instance storage, and
//! - the caller's resident record (membership and counselor flag).
//!
//! Entry points declare the [`Permission`] class they need and call
//! [`require`]; a failed check returns the class-specific error so clients
//! can tell which class was missing.
//!
//! | Permission          | Satisfied by                          |
//! |---------------------|---------------------------------------|
//! | `OnlyManager`       | manager                               |
//! | `ManagerOrCounselor`| manager, counselor                    |
//! | `ManagerOrResident` | manager, counselor, any resident      |

use soroban_sdk::{Address, Env};

use condominium_interface::{Error, Role};

use crate::storage;

/// Permission class required by an entry point.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Permission {
    OnlyManager,
    ManagerOrCounselor,
    ManagerOrResident,
}

impl Permission {
    fn denied(self) -> Error {
        match self {
            Permission::OnlyManager => Error::OnlyManager,
            Permission::ManagerOrCounselor => Error::OnlyManagerOrCounselors,
            Permission::ManagerOrResident => Error::OnlyManagerOrResidents,
        }
    }

    fn admits(self, role: Role) -> bool {
        match self {
            Permission::OnlyManager => role == Role::Manager,
            Permission::ManagerOrCounselor => matches!(role, Role::Manager | Role::Counselor),
            Permission::ManagerOrResident => true,
        }
    }
}

/// Effective role of `address`, or `None` for outsiders.
///
/// The manager role wins over a counselor flag, which wins over plain
/// residency.
pub fn role_of(env: &Env, address: &Address) -> Result<Option<Role>, Error> {
    if *address == storage::get_manager(env)? {
        return Ok(Some(Role::Manager));
    }
    Ok(storage::load_resident(env, address).map(|resident| {
        if resident.is_counselor {
            Role::Counselor
        } else {
            Role::Resident
        }
    }))
}

/// Fail unless `caller` satisfies `permission`.
pub fn require(env: &Env, caller: &Address, permission: Permission) -> Result<(), Error> {
    match role_of(env, caller)? {
        Some(role) if permission.admits(role) => Ok(()),
        _ => Err(permission.denied()),
    }
}

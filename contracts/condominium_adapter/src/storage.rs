//! Instance storage of the adapter: its owner and the implementation it
//! forwards to. Both entries share the contract's lifetime and are bumped by
//! **7 days** whenever the TTL falls below 1 day remaining.

use soroban_sdk::{contracttype, Address, Env};

use condominium_interface::Error;

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address allowed to repoint the adapter.
    Owner,
    /// Current Condominium implementation, absent until the first upgrade.
    Implementation,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn get_implementation(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Implementation)
}

pub fn set_implementation(env: &Env, implementation: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Implementation, implementation);
    bump_instance(env);
}

//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key               | Type      | Description                          |
//! |-------------------|-----------|--------------------------------------|
//! | `Manager`         | `Address` | Current manager                      |
//! | `Token`           | `Address` | Asset used for quota and transfers   |
//! | `MonthlyQuota`    | `i128`    | Amount due per residence per period  |
//! | `TreasuryBalance` | `i128`    | Pooled funds available for transfers |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type        | Description                          |
//! |--------------------|-------------|--------------------------------------|
//! | `Resident(addr)`   | `Resident`  | Registry record of an address        |
//! | `PaidPeriod(res)`  | `u64`       | Last accounting period paid          |
//! | `Topic(title)`     | `Topic`     | Topic record                         |
//! | `Ballots(title)`   | `Vec<Vote>` | Ballots cast on a topic              |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Ballots live apart from the topic so that reading or editing a topic never
//! drags the (up to one per residence) ballot list along.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

use condominium_interface::{Error, Resident, Topic, Vote};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Manager address (Instance).
    Manager,
    /// Payment asset (Instance).
    Token,
    /// Current monthly quota (Instance).
    MonthlyQuota,
    /// Treasury balance scalar (Instance).
    TreasuryBalance,
    /// Resident record keyed by address (Persistent).
    Resident(Address),
    /// Last paid period keyed by residence code (Persistent).
    PaidPeriod(u32),
    /// Topic keyed by title (Persistent).
    Topic(String),
    /// Ballot list keyed by topic title (Persistent).
    Ballots(String),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Manager)
}

/// Write the initial instance entries. Called once from `init`.
pub fn initialize(env: &Env, manager: &Address, token: &Address, monthly_quota: i128) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Manager, manager);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::MonthlyQuota, &monthly_quota);
    instance.set(&DataKey::TreasuryBalance, &0i128);
    bump_instance(env);
}

pub fn get_manager(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Manager)
        .ok_or(Error::NotInitialized)
}

pub fn set_manager(env: &Env, manager: &Address) {
    env.storage().instance().set(&DataKey::Manager, manager);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn get_monthly_quota(env: &Env) -> Result<i128, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::MonthlyQuota)
        .ok_or(Error::NotInitialized)
}

pub fn set_monthly_quota(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::MonthlyQuota, &amount);
    bump_instance(env);
}

pub fn get_treasury_balance(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TreasuryBalance)
        .unwrap_or(0)
}

pub fn set_treasury_balance(env: &Env, balance: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TreasuryBalance, &balance);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Generic read that bumps the entry only when it exists.
fn load<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

pub fn load_resident(env: &Env, address: &Address) -> Option<Resident> {
    load(env, &DataKey::Resident(address.clone()))
}

pub fn save_resident(env: &Env, resident: &Resident) {
    let key = DataKey::Resident(resident.address.clone());
    env.storage().persistent().set(&key, resident);
    bump_persistent(env, &key);
}

pub fn remove_resident(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Resident(address.clone()));
}

pub fn load_paid_period(env: &Env, residence_id: u32) -> Option<u64> {
    load(env, &DataKey::PaidPeriod(residence_id))
}

pub fn save_paid_period(env: &Env, residence_id: u32, period: u64) {
    let key = DataKey::PaidPeriod(residence_id);
    env.storage().persistent().set(&key, &period);
    bump_persistent(env, &key);
}

pub fn has_topic(env: &Env, title: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Topic(title.clone()))
}

pub fn load_topic(env: &Env, title: &String) -> Option<Topic> {
    load(env, &DataKey::Topic(title.clone()))
}

pub fn save_topic(env: &Env, topic: &Topic) {
    let key = DataKey::Topic(topic.title.clone());
    env.storage().persistent().set(&key, topic);
    bump_persistent(env, &key);
}

/// Remove a topic together with its ballot list.
pub fn remove_topic(env: &Env, title: &String) {
    let persistent = env.storage().persistent();
    persistent.remove(&DataKey::Topic(title.clone()));
    persistent.remove(&DataKey::Ballots(title.clone()));
}

pub fn load_ballots(env: &Env, title: &String) -> Vec<Vote> {
    load(env, &DataKey::Ballots(title.clone())).unwrap_or_else(|| Vec::new(env))
}

pub fn save_ballots(env: &Env, title: &String, ballots: &Vec<Vote>) {
    let key = DataKey::Ballots(title.clone());
    env.storage().persistent().set(&key, ballots);
    bump_persistent(env, &key);
}

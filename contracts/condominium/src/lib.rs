//! # Condominium Contract
//!
//! The association ledger of a residential condominium. It exposes the single
//! Soroban contract `Condominium` whose entry points cover:
//!
//! | Area         | Entry Point(s)                                                  |
//! |--------------|-----------------------------------------------------------------|
//! | Bootstrap    | [`Condominium::init`]                                           |
//! | Registry     | `add_resident`, `remove_resident`, `set_counselor`              |
//! | Topics       | `add_topic`, `edit_topic`, `remove_topic`                       |
//! | Voting       | `open_voting`, `vote`, `close_voting`                           |
//! | Quota        | `pay_quota`                                                     |
//! | Treasury     | `transfer`                                                      |
//! | Queries      | `manager`, `monthly_quota`, `get_topic`, `number_of_votes`, ... |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`rbac`], storage access to [`storage`], and
//! each business area to its own module ([`registry`], [`quota`], [`voting`],
//! [`treasury`]). This file contains only the public entry points: it
//! authenticates the acting address and hands off.
//!
//! Residents normally reach these entry points through the
//! `CondominiumAdapter` contract, which forwards every call with the original
//! caller address so the checks here apply unchanged.
//!
//! Every entry point either commits all of its writes and token movements or
//! returns an [`Error`] and commits nothing.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod config;
mod events;
pub mod quota;
pub mod rbac;
pub mod registry;
mod storage;
pub mod treasury;
pub mod voting;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_quota;
#[cfg(test)]
mod test_treasury;

pub use condominium_interface::{
    Category, Error, ErrorKind, Resident, Role, Topic, TopicStatus, Vote, VoteOption,
};

#[contract]
pub struct Condominium;

#[contractimpl]
impl Condominium {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the ledger.
    ///
    /// Must be called exactly once immediately after deployment.
    ///
    /// - `manager` becomes the first manager and must sign the transaction.
    /// - `token` is the asset in which quotas are paid and transfers made.
    /// - `monthly_quota` must be positive.
    pub fn init(
        env: Env,
        manager: Address,
        token: Address,
        monthly_quota: i128,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        manager.require_auth();
        if monthly_quota <= 0 {
            return Err(Error::WrongAmount);
        }
        storage::initialize(&env, &manager, &token, monthly_quota);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────

    /// Register `resident` at `residence_id`. Manager or counselors only.
    pub fn add_resident(
        env: Env,
        caller: Address,
        resident: Address,
        residence_id: u32,
    ) -> Result<(), Error> {
        caller.require_auth();
        registry::add_resident(&env, &caller, &resident, residence_id)
    }

    /// Unregister `resident`. Manager only; counselors cannot be removed.
    pub fn remove_resident(env: Env, caller: Address, resident: Address) -> Result<(), Error> {
        caller.require_auth();
        registry::remove_resident(&env, &caller, &resident)
    }

    /// Grant or revoke the counselor flag of a resident. Manager only.
    pub fn set_counselor(
        env: Env,
        caller: Address,
        resident: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        registry::set_counselor(&env, &caller, &resident, enabled)
    }

    // ─────────────────────────────────────────────────────────
    // Topics and voting
    // ─────────────────────────────────────────────────────────

    /// Create an idle topic. Manager or residents.
    ///
    /// `responsible` defaults to `caller` when `None`.
    pub fn add_topic(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        category: Category,
        amount: i128,
        responsible: Option<Address>,
    ) -> Result<(), Error> {
        caller.require_auth();
        voting::add_topic(&env, &caller, title, description, category, amount, responsible)
    }

    /// Edit an idle topic. Manager only.
    pub fn edit_topic(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        amount: i128,
        responsible: Option<Address>,
    ) -> Result<(), Error> {
        caller.require_auth();
        voting::edit_topic(&env, &caller, title, description, amount, responsible)
    }

    /// Delete an idle topic. Manager only.
    pub fn remove_topic(env: Env, caller: Address, title: String) -> Result<(), Error> {
        caller.require_auth();
        voting::remove_topic(&env, &caller, title)
    }

    /// Move an idle topic to `Voting`. Manager only.
    pub fn open_voting(env: Env, caller: Address, title: String) -> Result<(), Error> {
        caller.require_auth();
        voting::open_voting(&env, &caller, title)
    }

    /// Cast the ballot of the caller's residence.
    pub fn vote(env: Env, caller: Address, title: String, option: VoteOption) -> Result<(), Error> {
        caller.require_auth();
        voting::vote(&env, &caller, title, option)
    }

    /// Tally a voting topic and apply its outcome. Manager only.
    pub fn close_voting(env: Env, caller: Address, title: String) -> Result<TopicStatus, Error> {
        caller.require_auth();
        voting::close_voting(&env, &caller, title)
    }

    // ─────────────────────────────────────────────────────────
    // Quota and treasury
    // ─────────────────────────────────────────────────────────

    /// Pay the monthly quota of `residence_id`. `amount` must equal the
    /// current quota.
    pub fn pay_quota(
        env: Env,
        payer: Address,
        residence_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        payer.require_auth();
        quota::pay_quota(&env, &payer, residence_id, amount)
    }

    /// Pay out an approved `Spent` topic. Manager only.
    pub fn transfer(env: Env, caller: Address, title: String, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        treasury::transfer(&env, &caller, title, amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn manager(env: Env) -> Result<Address, Error> {
        storage::get_manager(&env)
    }

    pub fn monthly_quota(env: Env) -> Result<i128, Error> {
        storage::get_monthly_quota(&env)
    }

    pub fn balance(env: Env) -> i128 {
        treasury::balance(&env)
    }

    pub fn role_of(env: Env, address: Address) -> Result<Option<Role>, Error> {
        rbac::role_of(&env, &address)
    }

    pub fn residence_exists(_env: Env, residence_id: u32) -> bool {
        registry::residence_exists(residence_id)
    }

    pub fn is_resident(env: Env, address: Address) -> bool {
        registry::is_resident(&env, &address)
    }

    pub fn residence_of(env: Env, address: Address) -> Option<u32> {
        registry::residence_of(&env, &address)
    }

    pub fn get_resident(env: Env, address: Address) -> Option<Resident> {
        storage::load_resident(&env, &address)
    }

    /// Whether `address` is a counselor.
    pub fn counselors(env: Env, address: Address) -> bool {
        registry::is_counselor(&env, &address)
    }

    pub fn is_defaulter(env: Env, residence_id: u32) -> bool {
        quota::is_defaulter(&env, residence_id)
    }

    pub fn last_paid_period(env: Env, residence_id: u32) -> Option<u64> {
        storage::load_paid_period(&env, residence_id)
    }

    pub fn current_period(env: Env) -> u64 {
        quota::current_period(&env)
    }

    pub fn topic_exists(env: Env, title: String) -> bool {
        storage::has_topic(&env, &title)
    }

    pub fn get_topic(env: Env, title: String) -> Option<Topic> {
        storage::load_topic(&env, &title)
    }

    pub fn number_of_votes(env: Env, title: String) -> u32 {
        voting::number_of_votes(&env, &title)
    }

    pub fn get_votes(env: Env, title: String) -> Vec<Vote> {
        storage::load_ballots(&env, &title)
    }
}

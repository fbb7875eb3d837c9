//! # Condominium interface
//!
//! The wire contract shared by the two Condominium contracts:
//!
//! - [`types`] — topics, ballots, residents and their enums.
//! - [`errors`] — the common [`Error`] codes and their reason strings.
//! - [`CondominiumApi`] — the caller-facing entry points of the
//!   implementation. `#[contractclient]` turns it into
//!   [`CondominiumApiClient`], which the adapter uses to forward calls to
//!   whichever implementation it currently points at.
//!
//! Every mutating entry point takes the acting address as its first
//! argument. The implementation calls `require_auth` on it, so the original
//! caller is preserved across the adapter hop.

#![no_std]

use soroban_sdk::{contractclient, Address, Env, String};

pub mod errors;
pub mod types;

pub use errors::{Error, ErrorKind};
pub use types::{Category, Resident, Role, Topic, TopicStatus, Vote, VoteOption};

/// Strkey of the all-zero ed25519 account, used as the "no address" marker.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// The null address for `env`.
pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

/// Whether `address` is the null address.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == null_address(env)
}

/// Entry points of the Condominium implementation contract.
#[contractclient(name = "CondominiumApiClient")]
pub trait CondominiumApi {
    // ── Registry ─────────────────────────────────────────────

    fn add_resident(env: Env, caller: Address, resident: Address, residence_id: u32)
        -> Result<(), Error>;

    fn remove_resident(env: Env, caller: Address, resident: Address) -> Result<(), Error>;

    fn set_counselor(env: Env, caller: Address, resident: Address, enabled: bool)
        -> Result<(), Error>;

    // ── Topics and voting ────────────────────────────────────

    fn add_topic(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        category: Category,
        amount: i128,
        responsible: Option<Address>,
    ) -> Result<(), Error>;

    fn edit_topic(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        amount: i128,
        responsible: Option<Address>,
    ) -> Result<(), Error>;

    fn remove_topic(env: Env, caller: Address, title: String) -> Result<(), Error>;

    fn open_voting(env: Env, caller: Address, title: String) -> Result<(), Error>;

    fn vote(env: Env, caller: Address, title: String, option: VoteOption) -> Result<(), Error>;

    fn close_voting(env: Env, caller: Address, title: String) -> Result<TopicStatus, Error>;

    // ── Quota and treasury ───────────────────────────────────

    fn pay_quota(env: Env, payer: Address, residence_id: u32, amount: i128) -> Result<(), Error>;

    fn transfer(env: Env, caller: Address, title: String, amount: i128) -> Result<(), Error>;

    // ── Queries ──────────────────────────────────────────────

    fn manager(env: Env) -> Result<Address, Error>;

    fn monthly_quota(env: Env) -> Result<i128, Error>;

    fn topic_exists(env: Env, title: String) -> bool;

    fn get_topic(env: Env, title: String) -> Option<Topic>;

    fn number_of_votes(env: Env, title: String) -> u32;

    fn is_resident(env: Env, address: Address) -> bool;

    fn residence_exists(env: Env, residence_id: u32) -> bool;

    fn counselors(env: Env, address: Address) -> bool;
}

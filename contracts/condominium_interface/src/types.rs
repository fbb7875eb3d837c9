//! # Types
//!
//! Data structures shared by the `Condominium` implementation contract and
//! the `CondominiumAdapter` forwarding contract. Both sides encode these
//! identically, so a value returned by the implementation can be handed
//! back unchanged by the adapter.
//!
//! ## Topic lifecycle
//!
//! [`TopicStatus`] is a forward-only state machine:
//!
//! ```text
//! Idle ──► Voting ──► Approved ──► Spent   (Spent category only)
//!              └────► Denied
//! ```
//!
//! Only `Idle` topics may be edited, removed or opened. `Approved`,
//! `Denied` and `Spent` are terminal for voting purposes.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a topic.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TopicStatus {
    /// Created, still editable.
    Idle = 0,
    /// Open for ballots.
    Voting = 1,
    /// Closed with more YES than NO ballots.
    Approved = 2,
    /// Closed without a YES majority.
    Denied = 3,
    /// Approved spending whose funds were transferred.
    Spent = 4,
}

/// Closed catalog of topic categories.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Category {
    /// Plain decision, no side effect.
    Decision = 0,
    /// Spending of treasury funds to `responsible`.
    Spent = 1,
    /// Replaces the monthly quota with `amount`.
    ChangeQuota = 2,
    /// Hands the manager role to `responsible`.
    ChangeManager = 3,
}

impl Category {
    /// Whether topics of this category carry a monetary amount.
    pub fn carries_amount(&self) -> bool {
        matches!(self, Category::Spent | Category::ChangeQuota)
    }
}

/// Ballot option. `Empty` is only ever an input, never a stored ballot.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteOption {
    Empty = 0,
    Yes = 1,
    No = 2,
    Abstention = 3,
}

/// Effective permission level of an address.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Manager = 0,
    Counselor = 1,
    Resident = 2,
}

/// A registered resident.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resident {
    pub address: Address,
    /// Residence code (`BFUU`, e.g. `2102`).
    pub residence_id: u32,
    pub is_counselor: bool,
    /// Ledger timestamp of the (last) registration.
    pub registered_at: u64,
}

/// A deliberation topic, keyed by its unique title.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Topic {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Spent: approved spending; ChangeQuota: the new quota; otherwise 0.
    pub amount: i128,
    /// Spent: payee; ChangeManager: candidate; otherwise the proposer.
    pub responsible: Address,
    pub status: TopicStatus,
    pub created_date: u64,
    /// Set by `open_voting` (0 until then).
    pub start_date: u64,
    /// Set by `close_voting` (0 until then).
    pub end_date: u64,
}

/// A ballot, cast on behalf of a residence.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub residence_id: u32,
    pub option: VoteOption,
    pub timestamp: u64,
}

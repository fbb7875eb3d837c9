//! # Errors
//!
//! A single error enum covers both contracts so that a failure raised by the
//! implementation surfaces with the same code when the call went through the
//! adapter. Codes are part of the public interface; never renumber them.
//!
//! [`Error::message`] returns the human-readable reason string clients match
//! on. Several strings keep their historical spelling ("VOTTING", "muste",
//! "whithout") because existing clients compare them literally.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,
    PermissionDenied = 3,
    UpgradeRequired = 4,

    // Authorization
    OnlyManager = 10,
    OnlyManagerOrCounselors = 11,
    OnlyManagerOrResidents = 12,

    // Registry
    InvalidResidence = 20,
    InvalidAddress = 21,
    ResidentIsCounselor = 22,
    NotAResident = 23,

    // Topics and voting
    DuplicateTopic = 30,
    UnknownTopic = 31,
    NotIdleToRemove = 32,
    NotIdleToEdit = 33,
    NotIdleToOpen = 34,
    NotVotingToVote = 35,
    NotVotingToClose = 36,
    EmptyOptionRejected = 37,
    AlreadyVoted = 38,
    MustHavePaidQuota = 39,
    BelowMinimumVotes = 40,
    InvalidCategoryAmount = 41,

    // Quota and treasury
    UnknownResidence = 50,
    WrongAmount = 51,
    AlreadyPaidThisPeriod = 52,
    InsufficientFunds = 53,
    NotApprovedSpent = 54,
    AmountExceedsApproved = 55,
}

/// Coarse classification of [`Error`] values.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Contract set-up and upgrade state.
    Lifecycle,
    /// Caller lacks the required role.
    Authorization,
    /// Unknown residence or topic.
    NotFound,
    /// Operation invalid for the current topic status.
    State,
    /// Malformed input.
    Validation,
    /// Payment and treasury rules.
    Accounting,
    /// Minimum participation not reached.
    Quorum,
}

impl Error {
    /// Reason string associated with the error.
    pub fn message(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "Contract already initialized",
            Error::NotInitialized => "Contract not initialized",
            Error::PermissionDenied => "You do not have permission",
            Error::UpgradeRequired => "You must upgrade first",
            Error::OnlyManager => "Only the manager can do this",
            Error::OnlyManagerOrCounselors => "Only the manager or Counselors can do this",
            Error::OnlyManagerOrResidents => "Only the manager or the residents can do this",
            Error::InvalidResidence => "This residence does not exists",
            Error::InvalidAddress => "Invalid address",
            Error::ResidentIsCounselor => "A counselor cannot be removed",
            Error::NotAResident => "The counselor must be a resident",
            Error::DuplicateTopic => "This topic already exists",
            Error::UnknownTopic => "The topic does not exists",
            Error::NotIdleToRemove => "Only IDLE topics can be removed",
            Error::NotIdleToEdit => "Only IDLE topics can be edited",
            Error::NotIdleToOpen => "Only IDLE topics can be open for voting",
            Error::NotVotingToVote => "Only VOTING topics can be voted",
            Error::NotVotingToClose => "Only VOTTING topics can be closed",
            Error::EmptyOptionRejected => "The option cannot be EMPTY",
            Error::AlreadyVoted => "A residence should vote only once",
            Error::MustHavePaidQuota => "The resident must have paid quota",
            Error::BelowMinimumVotes => "You cannot finish a voting whithout the minimum votes",
            Error::InvalidCategoryAmount => "Wrong category",
            Error::UnknownResidence => "The residence does not exists",
            Error::WrongAmount => "Wrong value",
            Error::AlreadyPaidThisPeriod => "You cannot pay twice a month",
            Error::InsufficientFunds => "Insufficient funds",
            Error::NotApprovedSpent => "Only APPROVED SPENT topics can be used for transfers",
            Error::AmountExceedsApproved => "The amount muste be less or equal the APPROVED topic",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyInitialized
            | Error::NotInitialized
            | Error::PermissionDenied
            | Error::UpgradeRequired => ErrorKind::Lifecycle,
            Error::OnlyManager | Error::OnlyManagerOrCounselors | Error::OnlyManagerOrResidents => {
                ErrorKind::Authorization
            }
            Error::InvalidResidence
            | Error::NotAResident
            | Error::UnknownTopic
            | Error::UnknownResidence => ErrorKind::NotFound,
            Error::ResidentIsCounselor
            | Error::DuplicateTopic
            | Error::NotIdleToRemove
            | Error::NotIdleToEdit
            | Error::NotIdleToOpen
            | Error::NotVotingToVote
            | Error::NotVotingToClose
            | Error::AlreadyVoted
            | Error::NotApprovedSpent => ErrorKind::State,
            Error::InvalidAddress | Error::EmptyOptionRejected | Error::InvalidCategoryAmount => {
                ErrorKind::Validation
            }
            Error::MustHavePaidQuota
            | Error::WrongAmount
            | Error::AlreadyPaidThisPeriod
            | Error::InsufficientFunds
            | Error::AmountExceedsApproved => ErrorKind::Accounting,
            Error::BelowMinimumVotes => ErrorKind::Quorum,
        }
    }
}

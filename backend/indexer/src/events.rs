//! Event kinds published by the Condominium contracts and the records the
//! indexer keeps for them.
//!
//! The leading topic symbol names the event; the second topic, when present,
//! is its subject (a residence code, a resident address or a topic title).

use serde::{Deserialize, Serialize};

/// What the second topic of an event identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Residence,
    Resident,
    Topic,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residence => "residence",
            Self::Resident => "resident",
            Self::Topic => "topic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// `res_add`
    ResidentAdded,
    /// `res_del`
    ResidentRemoved,
    /// `counselor`
    CounselorSet,
    /// `t_add`
    TopicCreated,
    /// `t_edit`
    TopicEdited,
    /// `t_del`
    TopicRemoved,
    /// `t_open`
    VotingOpened,
    /// `voted`
    VoteCast,
    /// `t_close`
    VotingClosed,
    /// `mgr_set`
    ManagerChanged,
    /// `quota_set`
    QuotaChanged,
    /// `paid`
    QuotaPaid,
    /// `transfer`
    FundsTransferred,
    /// `upgraded`, published by the adapter.
    ImplementationUpgraded,
    Unknown,
}

impl EventKind {
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "res_add" => Self::ResidentAdded,
            "res_del" => Self::ResidentRemoved,
            "counselor" => Self::CounselorSet,
            "t_add" => Self::TopicCreated,
            "t_edit" => Self::TopicEdited,
            "t_del" => Self::TopicRemoved,
            "t_open" => Self::VotingOpened,
            "voted" => Self::VoteCast,
            "t_close" => Self::VotingClosed,
            "mgr_set" => Self::ManagerChanged,
            "quota_set" => Self::QuotaChanged,
            "paid" => Self::QuotaPaid,
            "transfer" => Self::FundsTransferred,
            "upgraded" => Self::ImplementationUpgraded,
            _ => Self::Unknown,
        }
    }

    /// Identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResidentAdded => "resident_added",
            Self::ResidentRemoved => "resident_removed",
            Self::CounselorSet => "counselor_set",
            Self::TopicCreated => "topic_created",
            Self::TopicEdited => "topic_edited",
            Self::TopicRemoved => "topic_removed",
            Self::VotingOpened => "voting_opened",
            Self::VoteCast => "vote_cast",
            Self::VotingClosed => "voting_closed",
            Self::ManagerChanged => "manager_changed",
            Self::QuotaChanged => "quota_changed",
            Self::QuotaPaid => "quota_paid",
            Self::FundsTransferred => "funds_transferred",
            Self::ImplementationUpgraded => "implementation_upgraded",
            Self::Unknown => "unknown",
        }
    }

    /// Kind of the subject topic, `None` for events published without one.
    pub fn subject_kind(&self) -> Option<SubjectKind> {
        match self {
            Self::ResidentAdded | Self::QuotaPaid => Some(SubjectKind::Residence),
            Self::ResidentRemoved | Self::CounselorSet => Some(SubjectKind::Resident),
            Self::TopicCreated
            | Self::TopicEdited
            | Self::TopicRemoved
            | Self::VotingOpened
            | Self::VoteCast
            | Self::VotingClosed
            | Self::FundsTransferred => Some(SubjectKind::Topic),
            Self::ManagerChanged
            | Self::QuotaChanged
            | Self::ImplementationUpgraded
            | Self::Unknown => None,
        }
    }
}

/// A decoded event, ready to be stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CondominiumEvent {
    /// RPC event id; unique per emitted event.
    pub event_id: String,
    pub event_type: String,
    pub subject_kind: Option<String>,
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A stored event row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub subject_kind: Option<String>,
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

//! # Events
//!
//! Every state change publishes one event. The first topic entry is a short
//! symbol naming the event; the second, when present, is the subject (a
//! residence code, a resident address or a topic title). The off-chain
//! indexer keys its records on that subject.
//!
//! | Symbol      | Subject        | Data                 |
//! |-------------|----------------|----------------------|
//! | `res_add`   | residence code | [`ResidentAdded`]    |
//! | `res_del`   | address        | [`ResidentRemoved`]  |
//! | `counselor` | address        | [`CounselorSet`]     |
//! | `t_add`     | title          | [`TopicCreated`]     |
//! | `t_edit`    | title          | [`TopicEdited`]      |
//! | `t_del`     | title          | [`TopicRemoved`]     |
//! | `t_open`    | title          | [`VotingOpened`]     |
//! | `voted`     | title          | [`VoteCast`]         |
//! | `t_close`   | title          | [`VotingClosed`]     |
//! | `mgr_set`   | —              | [`ManagerChanged`]   |
//! | `quota_set` | —              | [`QuotaChanged`]     |
//! | `paid`      | residence code | [`QuotaPaid`]        |
//! | `transfer`  | title          | [`FundsTransferred`] |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use condominium_interface::{Category, Topic, TopicStatus, VoteOption};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResidentAdded {
    pub resident: Address,
    pub residence_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResidentRemoved {
    pub resident: Address,
    pub residence_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CounselorSet {
    pub resident: Address,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopicCreated {
    pub title: String,
    pub category: Category,
    pub amount: i128,
    pub responsible: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopicEdited {
    pub title: String,
    pub amount: i128,
    pub responsible: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopicRemoved {
    pub title: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingOpened {
    pub title: String,
    pub start_date: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub title: String,
    pub residence_id: u32,
    pub option: VoteOption,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingClosed {
    pub title: String,
    pub status: TopicStatus,
    pub yes: u32,
    pub no: u32,
    pub abstention: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerChanged {
    pub previous: Address,
    pub manager: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuotaChanged {
    pub previous: i128,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuotaPaid {
    pub residence_id: u32,
    pub payer: Address,
    pub amount: i128,
    pub period: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsTransferred {
    pub title: String,
    pub to: Address,
    pub amount: i128,
}

pub fn resident_added(env: &Env, resident: &Address, residence_id: u32) {
    env.events().publish(
        (symbol_short!("res_add"), residence_id),
        ResidentAdded {
            resident: resident.clone(),
            residence_id,
        },
    );
}

pub fn resident_removed(env: &Env, resident: &Address, residence_id: u32) {
    env.events().publish(
        (symbol_short!("res_del"), resident.clone()),
        ResidentRemoved {
            resident: resident.clone(),
            residence_id,
        },
    );
}

pub fn counselor_set(env: &Env, resident: &Address, enabled: bool) {
    env.events().publish(
        (symbol_short!("counselor"), resident.clone()),
        CounselorSet {
            resident: resident.clone(),
            enabled,
        },
    );
}

pub fn topic_created(env: &Env, topic: &Topic) {
    env.events().publish(
        (symbol_short!("t_add"), topic.title.clone()),
        TopicCreated {
            title: topic.title.clone(),
            category: topic.category,
            amount: topic.amount,
            responsible: topic.responsible.clone(),
        },
    );
}

pub fn topic_edited(env: &Env, topic: &Topic) {
    env.events().publish(
        (symbol_short!("t_edit"), topic.title.clone()),
        TopicEdited {
            title: topic.title.clone(),
            amount: topic.amount,
            responsible: topic.responsible.clone(),
        },
    );
}

pub fn topic_removed(env: &Env, title: &String) {
    env.events().publish(
        (symbol_short!("t_del"), title.clone()),
        TopicRemoved {
            title: title.clone(),
        },
    );
}

pub fn voting_opened(env: &Env, topic: &Topic) {
    env.events().publish(
        (symbol_short!("t_open"), topic.title.clone()),
        VotingOpened {
            title: topic.title.clone(),
            start_date: topic.start_date,
        },
    );
}

pub fn vote_cast(env: &Env, title: &String, residence_id: u32, option: VoteOption) {
    env.events().publish(
        (symbol_short!("voted"), title.clone()),
        VoteCast {
            title: title.clone(),
            residence_id,
            option,
        },
    );
}

pub fn voting_closed(
    env: &Env,
    title: &String,
    status: TopicStatus,
    yes: u32,
    no: u32,
    abstention: u32,
) {
    env.events().publish(
        (symbol_short!("t_close"), title.clone()),
        VotingClosed {
            title: title.clone(),
            status,
            yes,
            no,
            abstention,
        },
    );
}

pub fn manager_changed(env: &Env, previous: &Address, manager: &Address) {
    env.events().publish(
        (symbol_short!("mgr_set"),),
        ManagerChanged {
            previous: previous.clone(),
            manager: manager.clone(),
        },
    );
}

pub fn quota_changed(env: &Env, previous: i128, amount: i128) {
    env.events().publish(
        (symbol_short!("quota_set"),),
        QuotaChanged { previous, amount },
    );
}

pub fn quota_paid(env: &Env, residence_id: u32, payer: &Address, amount: i128, period: u64) {
    env.events().publish(
        (symbol_short!("paid"), residence_id),
        QuotaPaid {
            residence_id,
            payer: payer.clone(),
            amount,
            period,
        },
    );
}

pub fn funds_transferred(env: &Env, title: &String, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), title.clone()),
        FundsTransferred {
            title: title.clone(),
            to: to.clone(),
            amount,
        },
    );
}

//! Treasury: the pooled balance and its single outflow.
//!
//! The balance scalar mirrors the asset the contract holds from quota
//! payments. Funds only leave through [`transfer`], against a `Spent`
//! topic that was approved by vote, and each such topic pays out once.

use soroban_sdk::{token, Address, Env, String};

use condominium_interface::{Category, Error, TopicStatus};

use crate::rbac::{self, Permission};
use crate::{events, storage};

pub fn balance(env: &Env) -> i128 {
    storage::get_treasury_balance(env)
}

pub(crate) fn credit(env: &Env, amount: i128) {
    let balance = storage::get_treasury_balance(env);
    storage::set_treasury_balance(env, balance + amount);
}

/// Pay `amount` to the responsible address of an approved `Spent` topic and
/// mark the topic as spent.
pub fn transfer(env: &Env, caller: &Address, title: String, amount: i128) -> Result<(), Error> {
    rbac::require(env, caller, Permission::OnlyManager)?;
    let balance = storage::get_treasury_balance(env);
    if amount > balance {
        return Err(Error::InsufficientFunds);
    }
    let mut topic = storage::load_topic(env, &title).ok_or(Error::UnknownTopic)?;
    if topic.category != Category::Spent || topic.status != TopicStatus::Approved {
        return Err(Error::NotApprovedSpent);
    }
    if amount > topic.amount {
        return Err(Error::AmountExceedsApproved);
    }
    if amount <= 0 {
        return Err(Error::WrongAmount);
    }

    storage::set_treasury_balance(env, balance - amount);
    topic.status = TopicStatus::Spent;
    storage::save_topic(env, &topic);

    let token_client = token::Client::new(env, &storage::get_token(env)?);
    token_client.transfer(&env.current_contract_address(), &topic.responsible, &amount);

    events::funds_transferred(env, &title, &topic.responsible, amount);
    Ok(())
}

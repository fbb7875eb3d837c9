//! Quota ledger: one payment per residence per accounting period.
//!
//! Periods are fixed 30-day epochs counted from the Unix epoch, so every
//! residence rolls over to a new period at the same instant.

use soroban_sdk::{token, Address, Env};

use condominium_interface::Error;

use crate::config::QUOTA_PERIOD_SECS;
use crate::registry;
use crate::storage;
use crate::{events, treasury};

/// Accounting period containing the current ledger timestamp.
pub fn current_period(env: &Env) -> u64 {
    env.ledger().timestamp() / QUOTA_PERIOD_SECS
}

/// A residence is a defaulter unless it paid for the current period.
pub fn is_defaulter(env: &Env, residence_id: u32) -> bool {
    storage::load_paid_period(env, residence_id) != Some(current_period(env))
}

/// Collect the quota for `residence_id` from `payer`.
///
/// Anyone may pay on behalf of a residence. The asset is moved into the
/// contract before the treasury is credited; a failed transfer aborts the
/// whole invocation.
pub fn pay_quota(env: &Env, payer: &Address, residence_id: u32, amount: i128) -> Result<(), Error> {
    if !registry::residence_exists(residence_id) {
        return Err(Error::UnknownResidence);
    }
    if amount != storage::get_monthly_quota(env)? {
        return Err(Error::WrongAmount);
    }
    let period = current_period(env);
    if storage::load_paid_period(env, residence_id) == Some(period) {
        return Err(Error::AlreadyPaidThisPeriod);
    }

    let token_client = token::Client::new(env, &storage::get_token(env)?);
    token_client.transfer(payer, &env.current_contract_address(), &amount);

    storage::save_paid_period(env, residence_id, period);
    treasury::credit(env, amount);
    events::quota_paid(env, residence_id, payer, amount, period);
    Ok(())
}

/// Replace the monthly quota. Only reachable through an approved
/// `ChangeQuota` topic.
pub(crate) fn set_quota(env: &Env, amount: i128) -> Result<(), Error> {
    let previous = storage::get_monthly_quota(env)?;
    storage::set_monthly_quota(env, amount);
    events::quota_changed(env, previous, amount);
    Ok(())
}

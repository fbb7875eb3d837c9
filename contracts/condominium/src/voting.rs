//! # Topic store and voting engine
//!
//! Topics move through a forward-only lifecycle:
//!
//! ```text
//! add_topic ──► Idle ──open_voting──► Voting ──close_voting──► Approved | Denied
//!                │                                                │
//!          edit / remove                              transfer (Spent only)
//!                                                                 ▼
//!                                                               Spent
//! ```
//!
//! Ballots are cast per residence, not per address: co-residents of the same
//! unit share one ballot. A residence that has not paid the quota for the
//! current period cannot vote.
//!
//! Closing requires [`minimum_votes`] ballots for the topic's category.
//! Abstentions count toward that minimum but not toward the outcome: the
//! topic is approved only when YES ballots strictly outnumber NO ballots.
//! Approval of a `ChangeManager` or `ChangeQuota` topic applies its side
//! effect in the same invocation.

use soroban_sdk::{Address, Env, String, Vec};

use condominium_interface::{
    is_null_address, Category, Error, Topic, TopicStatus, Vote, VoteOption,
};

use crate::config::minimum_votes;
use crate::rbac::{self, Permission};
use crate::{events, quota, registry, storage};

/// Amount rule per category: `Decision`/`ChangeManager` carry no amount,
/// `Spent`/`ChangeQuota` carry a positive one.
fn check_category_amount(category: Category, amount: i128) -> Result<(), Error> {
    let valid = if category.carries_amount() {
        amount > 0
    } else {
        amount == 0
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidCategoryAmount)
    }
}

fn load_existing(env: &Env, title: &String) -> Result<Topic, Error> {
    storage::load_topic(env, title).ok_or(Error::UnknownTopic)
}

pub fn add_topic(
    env: &Env,
    caller: &Address,
    title: String,
    description: String,
    category: Category,
    amount: i128,
    responsible: Option<Address>,
) -> Result<(), Error> {
    rbac::require(env, caller, Permission::ManagerOrResident)?;
    if storage::has_topic(env, &title) {
        return Err(Error::DuplicateTopic);
    }
    check_category_amount(category, amount)?;

    // A missing or null responsible falls back to the caller.
    let responsible = match responsible {
        Some(responsible) if !is_null_address(env, &responsible) => responsible,
        _ => caller.clone(),
    };
    let topic = Topic {
        title,
        description,
        category,
        amount,
        responsible,
        status: TopicStatus::Idle,
        created_date: env.ledger().timestamp(),
        start_date: 0,
        end_date: 0,
    };
    storage::save_topic(env, &topic);
    events::topic_created(env, &topic);
    Ok(())
}

/// Edit an idle topic. An empty description, a zero amount and a `None` or
/// null responsible each leave the current value in place.
pub fn edit_topic(
    env: &Env,
    caller: &Address,
    title: String,
    description: String,
    amount: i128,
    responsible: Option<Address>,
) -> Result<(), Error> {
    rbac::require(env, caller, Permission::OnlyManager)?;
    let mut topic = load_existing(env, &title)?;
    if topic.status != TopicStatus::Idle {
        return Err(Error::NotIdleToEdit);
    }

    if !description.is_empty() {
        topic.description = description;
    }
    if amount != 0 {
        check_category_amount(topic.category, amount)?;
        topic.amount = amount;
    }
    if let Some(responsible) = responsible.filter(|r| !is_null_address(env, r)) {
        topic.responsible = responsible;
    }

    storage::save_topic(env, &topic);
    events::topic_edited(env, &topic);
    Ok(())
}

pub fn remove_topic(env: &Env, caller: &Address, title: String) -> Result<(), Error> {
    rbac::require(env, caller, Permission::OnlyManager)?;
    let topic = load_existing(env, &title)?;
    if topic.status != TopicStatus::Idle {
        return Err(Error::NotIdleToRemove);
    }

    storage::remove_topic(env, &title);
    events::topic_removed(env, &title);
    Ok(())
}

pub fn open_voting(env: &Env, caller: &Address, title: String) -> Result<(), Error> {
    rbac::require(env, caller, Permission::OnlyManager)?;
    let mut topic = load_existing(env, &title)?;
    if topic.status != TopicStatus::Idle {
        return Err(Error::NotIdleToOpen);
    }

    topic.status = TopicStatus::Voting;
    topic.start_date = env.ledger().timestamp();
    storage::save_topic(env, &topic);
    events::voting_opened(env, &topic);
    Ok(())
}

/// Cast the ballot of the caller's residence.
///
/// A caller without a residence (a manager who is not a resident) has no
/// paid quota and is rejected as a defaulter.
pub fn vote(env: &Env, caller: &Address, title: String, option: VoteOption) -> Result<(), Error> {
    rbac::require(env, caller, Permission::ManagerOrResident)?;
    let topic = load_existing(env, &title)?;
    if topic.status != TopicStatus::Voting {
        return Err(Error::NotVotingToVote);
    }
    if option == VoteOption::Empty {
        return Err(Error::EmptyOptionRejected);
    }
    let residence_id = match registry::residence_of(env, caller) {
        Some(residence_id) if !quota::is_defaulter(env, residence_id) => residence_id,
        _ => return Err(Error::MustHavePaidQuota),
    };

    let mut ballots = storage::load_ballots(env, &title);
    if ballots.iter().any(|b| b.residence_id == residence_id) {
        return Err(Error::AlreadyVoted);
    }

    ballots.push_back(Vote {
        residence_id,
        option,
        timestamp: env.ledger().timestamp(),
    });
    storage::save_ballots(env, &title, &ballots);
    events::vote_cast(env, &title, residence_id, option);
    Ok(())
}

/// Ballot counts of a topic.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub yes: u32,
    pub no: u32,
    pub abstention: u32,
}

impl Tally {
    pub fn count(ballots: &Vec<Vote>) -> Self {
        let mut tally = Tally::default();
        for ballot in ballots.iter() {
            match ballot.option {
                VoteOption::Yes => tally.yes += 1,
                VoteOption::No => tally.no += 1,
                VoteOption::Abstention => tally.abstention += 1,
                VoteOption::Empty => {}
            }
        }
        tally
    }

    pub fn total(&self) -> u32 {
        self.yes + self.no + self.abstention
    }

    /// Strict YES majority approves; a tie is a denial.
    pub fn outcome(&self) -> TopicStatus {
        if self.yes > self.no {
            TopicStatus::Approved
        } else {
            TopicStatus::Denied
        }
    }
}

pub fn close_voting(env: &Env, caller: &Address, title: String) -> Result<TopicStatus, Error> {
    rbac::require(env, caller, Permission::OnlyManager)?;
    let mut topic = load_existing(env, &title)?;
    if topic.status != TopicStatus::Voting {
        return Err(Error::NotVotingToClose);
    }
    let tally = Tally::count(&storage::load_ballots(env, &title));
    if tally.total() < minimum_votes(topic.category) {
        return Err(Error::BelowMinimumVotes);
    }

    topic.status = tally.outcome();
    topic.end_date = env.ledger().timestamp();
    storage::save_topic(env, &topic);

    if topic.status == TopicStatus::Approved {
        match topic.category {
            Category::ChangeManager => {
                let previous = storage::get_manager(env)?;
                storage::set_manager(env, &topic.responsible);
                events::manager_changed(env, &previous, &topic.responsible);
            }
            Category::ChangeQuota => quota::set_quota(env, topic.amount)?,
            // Spent waits for `transfer`; Decision has no effect.
            Category::Spent | Category::Decision => {}
        }
    }

    events::voting_closed(env, &title, topic.status, tally.yes, tally.no, tally.abstention);
    Ok(topic.status)
}

pub fn number_of_votes(env: &Env, title: &String) -> u32 {
    storage::load_ballots(env, title).len()
}

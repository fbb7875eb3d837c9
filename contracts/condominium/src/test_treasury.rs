extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::invariants::{assert_all_topic_invariants, assert_treasury_backed};
use crate::test::{setup, text, Fixture, QUOTA};
use crate::{Category, Error, TopicStatus, VoteOption};

/// Ten paying residents and an approved `Spent` topic of `amount` paying
/// `worker`. Treasury holds `10 * QUOTA`.
fn approved_spending(amount: i128) -> (Fixture, Address) {
    let f = setup();
    let residents = f.add_paying_residents(10);
    let worker = Address::generate(&f.env);
    f.open_topic("topic 1", Category::Spent, amount, Some(worker.clone()));
    f.vote_all(&residents, "topic 1", VoteOption::Yes);
    f.client.close_voting(&f.manager, &text(&f.env, "topic 1"));
    (f, worker)
}

#[test]
fn test_transfer_pays_responsible() {
    let (f, worker) = approved_spending(100);
    let title = text(&f.env, "topic 1");

    f.client.transfer(&f.manager, &title, &100);

    assert_eq!(f.token.balance(&worker), 100);
    assert_eq!(f.client.balance(), 10 * QUOTA - 100);
    assert_eq!(f.token.balance(&f.client.address), 10 * QUOTA - 100);

    let topic = f.client.get_topic(&title).unwrap();
    assert_eq!(topic.status, TopicStatus::Spent);
    assert_all_topic_invariants(&topic);
    assert_treasury_backed(f.client.balance(), f.token.balance(&f.client.address));
}

#[test]
fn test_transfer_less_than_approved() {
    let (f, worker) = approved_spending(100);
    f.client.transfer(&f.manager, &text(&f.env, "topic 1"), &60);
    assert_eq!(f.token.balance(&worker), 60);
    assert_eq!(f.client.balance(), 10 * QUOTA - 60);
}

#[test]
fn test_second_transfer_fails() {
    let (f, _) = approved_spending(100);
    let title = text(&f.env, "topic 1");
    f.client.transfer(&f.manager, &title, &100);
    assert_eq!(
        f.client.try_transfer(&f.manager, &title, &100),
        Err(Ok(Error::NotApprovedSpent))
    );
}

#[test]
fn test_transfer_requires_manager() {
    let (f, worker) = approved_spending(100);
    assert_eq!(
        f.client.try_transfer(&worker, &text(&f.env, "topic 1"), &100),
        Err(Ok(Error::OnlyManager))
    );
}

#[test]
fn test_transfer_insufficient_funds() {
    let (f, _) = approved_spending(100);
    assert_eq!(
        f.client
            .try_transfer(&f.manager, &text(&f.env, "topic 1"), &(10 * QUOTA + 1)),
        Err(Ok(Error::InsufficientFunds))
    );
}

#[test]
fn test_transfer_more_than_approved() {
    let (f, worker) = approved_spending(100);
    assert_eq!(
        f.client.try_transfer(&f.manager, &text(&f.env, "topic 1"), &101),
        Err(Ok(Error::AmountExceedsApproved))
    );
    assert_eq!(f.token.balance(&worker), 0);
    assert_eq!(
        f.client.get_topic(&text(&f.env, "topic 1")).unwrap().status,
        TopicStatus::Approved
    );
}

#[test]
fn test_transfer_non_positive_amount() {
    let (f, _) = approved_spending(100);
    assert_eq!(
        f.client.try_transfer(&f.manager, &text(&f.env, "topic 1"), &0),
        Err(Ok(Error::WrongAmount))
    );
}

#[test]
fn test_transfer_unknown_topic() {
    let (f, _) = approved_spending(100);
    assert_eq!(
        f.client.try_transfer(&f.manager, &text(&f.env, "topic 2"), &100),
        Err(Ok(Error::UnknownTopic))
    );
}

#[test]
fn test_transfer_requires_approved_spent_topic() {
    let f = setup();
    let residents = f.add_paying_residents(10);

    // Approved, but not a spending topic.
    f.open_topic("decision", Category::Decision, 0, None);
    f.vote_all(&residents, "decision", VoteOption::Yes);
    f.client.close_voting(&f.manager, &text(&f.env, "decision"));
    assert_eq!(
        f.client.try_transfer(&f.manager, &text(&f.env, "decision"), &100),
        Err(Ok(Error::NotApprovedSpent))
    );

    // Spending topic still being voted.
    f.open_topic("spent", Category::Spent, 100, None);
    assert_eq!(
        f.client.try_transfer(&f.manager, &text(&f.env, "spent"), &100),
        Err(Ok(Error::NotApprovedSpent))
    );

    // Spending topic that was denied.
    f.vote_all(&residents, "spent", VoteOption::No);
    f.client.close_voting(&f.manager, &text(&f.env, "spent"));
    assert_eq!(
        f.client.try_transfer(&f.manager, &text(&f.env, "spent"), &100),
        Err(Ok(Error::NotApprovedSpent))
    );
    assert_eq!(f.client.balance(), 10 * QUOTA);
}

extern crate std;

use soroban_sdk::Vec;

use crate::{Category, Topic, TopicStatus, Vote, VoteOption};

/// INV-1: Amount is consistent with the category.
pub fn assert_amount_matches_category(topic: &Topic) {
    match topic.category {
        Category::Decision | Category::ChangeManager => assert_eq!(
            topic.amount, 0,
            "INV-1 violated: {:?} topic carries amount {}",
            topic.category, topic.amount
        ),
        Category::Spent | Category::ChangeQuota => assert!(
            topic.amount > 0,
            "INV-1 violated: {:?} topic has non-positive amount {}",
            topic.category,
            topic.amount
        ),
    }
}

/// INV-2: Only `Spent` topics can reach the `Spent` status.
pub fn assert_spent_status_only_for_spent_category(topic: &Topic) {
    if topic.status == TopicStatus::Spent {
        assert_eq!(
            topic.category,
            Category::Spent,
            "INV-2 violated: {:?} topic marked as spent",
            topic.category
        );
    }
}

/// INV-3: Dates follow the lifecycle. Idle topics have no start, closed
/// topics have both start and end, and dates never go backwards.
pub fn assert_dates_follow_status(topic: &Topic) {
    match topic.status {
        TopicStatus::Idle => {
            assert_eq!(topic.start_date, 0, "INV-3 violated: idle topic has start date");
            assert_eq!(topic.end_date, 0, "INV-3 violated: idle topic has end date");
        }
        TopicStatus::Voting => {
            assert_eq!(topic.end_date, 0, "INV-3 violated: voting topic has end date");
            assert!(
                topic.start_date >= topic.created_date,
                "INV-3 violated: start before creation"
            );
        }
        TopicStatus::Approved | TopicStatus::Denied | TopicStatus::Spent => {
            assert!(
                topic.end_date >= topic.start_date,
                "INV-3 violated: end date {} before start date {}",
                topic.end_date,
                topic.start_date
            );
        }
    }
}

/// INV-4: Status transition validity. Only forward transitions are allowed:
///   Idle     -> Voting
///   Voting   -> Approved | Denied
///   Approved -> Spent
pub fn assert_valid_status_transition(from: &TopicStatus, to: &TopicStatus) {
    let valid = matches!(
        (from, to),
        (TopicStatus::Idle, TopicStatus::Voting)
            | (TopicStatus::Voting, TopicStatus::Approved)
            | (TopicStatus::Voting, TopicStatus::Denied)
            | (TopicStatus::Approved, TopicStatus::Spent)
    );

    assert!(
        valid,
        "INV-4 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-5: At most one ballot per residence, and no stored `Empty` ballot.
pub fn assert_ballots_well_formed(ballots: &Vec<Vote>) {
    let mut seen = std::vec::Vec::new();
    for ballot in ballots.iter() {
        assert_ne!(
            ballot.option,
            VoteOption::Empty,
            "INV-5 violated: empty ballot stored for residence {}",
            ballot.residence_id
        );
        assert!(
            !seen.contains(&ballot.residence_id),
            "INV-5 violated: residence {} voted twice",
            ballot.residence_id
        );
        seen.push(ballot.residence_id);
    }
}

/// INV-6: The treasury scalar never exceeds what the contract actually holds.
pub fn assert_treasury_backed(treasury_balance: i128, token_balance: i128) {
    assert!(
        treasury_balance >= 0,
        "INV-6 violated: negative treasury balance {}",
        treasury_balance
    );
    assert!(
        treasury_balance <= token_balance,
        "INV-6 violated: treasury {} exceeds held funds {}",
        treasury_balance,
        token_balance
    );
}

/// Run all stateless topic invariants.
pub fn assert_all_topic_invariants(topic: &Topic) {
    assert_amount_matches_category(topic);
    assert_spent_status_only_for_spent_category(topic);
    assert_dates_follow_status(topic);
}

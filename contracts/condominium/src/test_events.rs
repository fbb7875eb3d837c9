extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, Symbol, TryFromVal, TryIntoVal, Val, Vec,
};

use crate::events::{
    FundsTransferred, ManagerChanged, QuotaChanged, QuotaPaid, ResidentAdded, ResidentRemoved,
    TopicCreated, VoteCast, VotingClosed, VotingOpened,
};
use crate::test::{setup, text, Fixture, QUOTA};
use crate::{Category, TopicStatus, VoteOption};

/// Topics and data of the last event published by the condominium itself.
fn last_own_event(f: &Fixture) -> (Vec<Val>, Val) {
    let all_events = f.env.events().all();
    let last_event = all_events
        .iter()
        .filter(|e| e.0 == f.client.address)
        .last()
        .expect("No events found");
    (last_event.1, last_event.2)
}

/// Last condominium event whose first topic is `name`.
fn last_named_event(f: &Fixture, name: Symbol) -> (Vec<Val>, Val) {
    let all_events = f.env.events().all();
    let last_event = all_events
        .iter()
        .filter(|e| e.0 == f.client.address)
        .filter(|e| {
            e.1.get(0)
                .and_then(|topic| Symbol::try_from_val(&f.env, &topic).ok())
                .map_or(false, |symbol| symbol == name)
        })
        .last()
        .expect("No matching event found");
    (last_event.1, last_event.2)
}

#[test]
fn test_resident_added_event() {
    let f = setup();
    let resident = Address::generate(&f.env);
    f.client.add_resident(&f.manager, &resident, &2102);

    let (topics, data) = last_own_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("res_add").into_val(&f.env),
        2102u32.into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);

    let event_data: ResidentAdded = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        ResidentAdded {
            resident,
            residence_id: 2102,
        }
    );
}

#[test]
fn test_resident_removed_event() {
    let f = setup();
    let resident = f.add_resident_at(1301);
    f.client.remove_resident(&f.manager, &resident);

    let (topics, data) = last_own_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("res_del").into_val(&f.env),
        resident.into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);

    let event_data: ResidentRemoved = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        ResidentRemoved {
            resident,
            residence_id: 1301,
        }
    );
}

#[test]
fn test_removing_unknown_resident_emits_nothing() {
    let f = setup();
    let stranger = Address::generate(&f.env);
    f.client.remove_resident(&f.manager, &stranger);

    let own = f
        .env
        .events()
        .all()
        .iter()
        .filter(|e| e.0 == f.client.address)
        .count();
    assert_eq!(own, 0);
}

#[test]
fn test_topic_created_event() {
    let f = setup();
    let worker = Address::generate(&f.env);
    f.add_topic("topic 1", Category::Spent, 100, Some(worker.clone()));

    let (topics, data) = last_own_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("t_add").into_val(&f.env),
        text(&f.env, "topic 1").into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);

    let event_data: TopicCreated = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        TopicCreated {
            title: text(&f.env, "topic 1"),
            category: Category::Spent,
            amount: 100,
            responsible: worker,
        }
    );
}

#[test]
fn test_voting_opened_event() {
    let f = setup();
    crate::test::set_timestamp(&f.env, 5_000);
    f.open_topic("topic 1", Category::Decision, 0, None);

    let (_, data) = last_own_event(&f);
    let event_data: VotingOpened = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        VotingOpened {
            title: text(&f.env, "topic 1"),
            start_date: 5_000,
        }
    );
}

#[test]
fn test_vote_cast_event() {
    let f = setup();
    let residents = f.add_paying_residents(1);
    f.open_topic("topic 1", Category::Decision, 0, None);
    f.client
        .vote(&residents[0], &text(&f.env, "topic 1"), &VoteOption::Abstention);

    let (topics, data) = last_own_event(&f);
    assert_eq!(
        topics,
        vec![
            &f.env,
            symbol_short!("voted").into_val(&f.env),
            text(&f.env, "topic 1").into_val(&f.env),
        ]
    );
    let event_data: VoteCast = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        VoteCast {
            title: text(&f.env, "topic 1"),
            residence_id: 1101,
            option: VoteOption::Abstention,
        }
    );
}

#[test]
fn test_voting_closed_event_carries_tally() {
    let f = setup();
    let residents = f.add_paying_residents(5);
    f.open_topic("topic 1", Category::Decision, 0, None);
    let title = text(&f.env, "topic 1");
    f.client.vote(&residents[0], &title, &VoteOption::Yes);
    f.client.vote(&residents[1], &title, &VoteOption::Yes);
    f.client.vote(&residents[2], &title, &VoteOption::No);
    f.client.vote(&residents[3], &title, &VoteOption::Abstention);
    f.client.vote(&residents[4], &title, &VoteOption::Abstention);
    f.client.close_voting(&f.manager, &title);

    let (_, data) = last_own_event(&f);
    let event_data: VotingClosed = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        VotingClosed {
            title,
            status: TopicStatus::Approved,
            yes: 2,
            no: 1,
            abstention: 2,
        }
    );
}

#[test]
fn test_manager_changed_event() {
    let f = setup();
    let residents = f.add_paying_residents(15);
    f.open_topic(
        "topic 1",
        Category::ChangeManager,
        0,
        Some(residents[1].clone()),
    );
    f.vote_all(&residents, "topic 1", VoteOption::Yes);
    f.client.close_voting(&f.manager, &text(&f.env, "topic 1"));

    let (topics, data) = last_named_event(&f, symbol_short!("mgr_set"));
    assert_eq!(topics, vec![&f.env, symbol_short!("mgr_set").into_val(&f.env)]);
    let event_data: ManagerChanged = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        ManagerChanged {
            previous: f.manager.clone(),
            manager: residents[1].clone(),
        }
    );
}

#[test]
fn test_quota_changed_event() {
    let f = setup();
    let residents = f.add_paying_residents(20);
    f.open_topic("topic 1", Category::ChangeQuota, QUOTA * 3, None);
    f.vote_all(&residents, "topic 1", VoteOption::Yes);
    f.client.close_voting(&f.manager, &text(&f.env, "topic 1"));

    let (topics, data) = last_named_event(&f, symbol_short!("quota_set"));
    assert_eq!(topics, vec![&f.env, symbol_short!("quota_set").into_val(&f.env)]);
    let event_data: QuotaChanged = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        QuotaChanged {
            previous: QUOTA,
            amount: QUOTA * 3,
        }
    );
}

#[test]
fn test_quota_paid_event() {
    let f = setup();
    let payer = Address::generate(&f.env);
    crate::test::set_timestamp(&f.env, crate::config::QUOTA_PERIOD_SECS * 4);
    f.pay(&payer, 1102);

    let (topics, data) = last_own_event(&f);
    assert_eq!(
        topics,
        vec![
            &f.env,
            symbol_short!("paid").into_val(&f.env),
            1102u32.into_val(&f.env),
        ]
    );
    let event_data: QuotaPaid = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        QuotaPaid {
            residence_id: 1102,
            payer,
            amount: QUOTA,
            period: 4,
        }
    );
}

#[test]
fn test_funds_transferred_event() {
    let f = setup();
    let residents = f.add_paying_residents(10);
    let worker = Address::generate(&f.env);
    f.open_topic("topic 1", Category::Spent, 100, Some(worker.clone()));
    f.vote_all(&residents, "topic 1", VoteOption::Yes);
    f.client.close_voting(&f.manager, &text(&f.env, "topic 1"));
    f.client.transfer(&f.manager, &text(&f.env, "topic 1"), &100);

    let (topics, data) = last_own_event(&f);
    assert_eq!(
        topics,
        vec![
            &f.env,
            symbol_short!("transfer").into_val(&f.env),
            text(&f.env, "topic 1").into_val(&f.env),
        ]
    );
    let event_data: FundsTransferred = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundsTransferred {
            title: text(&f.env, "topic 1"),
            to: worker,
            amount: 100,
        }
    );
}

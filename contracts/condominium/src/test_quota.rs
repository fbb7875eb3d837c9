extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::config::QUOTA_PERIOD_SECS;
use crate::invariants::assert_treasury_backed;
use crate::test::{advance_period, set_timestamp, setup, text, QUOTA};
use crate::{Category, Error, VoteOption};

#[test]
fn test_pay_quota() {
    let f = setup();
    let resident = f.add_resident_at(1102);
    assert!(f.client.is_defaulter(&1102));

    f.pay(&resident, 1102);

    assert!(!f.client.is_defaulter(&1102));
    assert_eq!(f.client.last_paid_period(&1102), Some(f.client.current_period()));
    assert_eq!(f.client.balance(), QUOTA);
    assert_eq!(f.token.balance(&f.client.address), QUOTA);
    assert_eq!(f.token.balance(&resident), 0);
    assert_treasury_backed(f.client.balance(), f.token.balance(&f.client.address));
}

#[test]
fn test_anyone_can_pay_for_a_residence() {
    let f = setup();
    let benefactor = Address::generate(&f.env);
    f.pay(&benefactor, 3505);
    assert!(!f.client.is_defaulter(&3505));
}

#[test]
fn test_pay_quota_unknown_residence() {
    let f = setup();
    let payer = Address::generate(&f.env);
    f.token_sac.mint(&payer, &QUOTA);
    assert_eq!(
        f.client.try_pay_quota(&payer, &2132, &QUOTA),
        Err(Ok(Error::UnknownResidence))
    );
}

#[test]
fn test_pay_quota_wrong_value() {
    let f = setup();
    let payer = Address::generate(&f.env);
    f.token_sac.mint(&payer, &(QUOTA * 2));
    assert_eq!(
        f.client.try_pay_quota(&payer, &1102, &(QUOTA - 1)),
        Err(Ok(Error::WrongAmount))
    );
    assert_eq!(
        f.client.try_pay_quota(&payer, &1102, &(QUOTA + 1)),
        Err(Ok(Error::WrongAmount))
    );
    assert_eq!(f.client.balance(), 0);
    assert_eq!(f.token.balance(&payer), QUOTA * 2);
}

#[test]
fn test_cannot_pay_twice_a_period() {
    let f = setup();
    let payer = Address::generate(&f.env);
    f.pay(&payer, 1102);

    f.token_sac.mint(&payer, &QUOTA);
    assert_eq!(
        f.client.try_pay_quota(&payer, &1102, &QUOTA),
        Err(Ok(Error::AlreadyPaidThisPeriod))
    );
    assert_eq!(f.client.balance(), QUOTA);
    assert_eq!(f.token.balance(&payer), QUOTA);
}

#[test]
fn test_new_period_resets_eligibility() {
    let f = setup();
    let payer = Address::generate(&f.env);
    f.pay(&payer, 1102);

    advance_period(&f.env);
    assert!(f.client.is_defaulter(&1102));

    f.pay(&payer, 1102);
    assert!(!f.client.is_defaulter(&1102));
    assert_eq!(f.client.balance(), QUOTA * 2);
}

#[test]
fn test_periods_are_fixed_epochs() {
    let f = setup();
    let payer = Address::generate(&f.env);

    // Paid one second before the period boundary.
    set_timestamp(&f.env, QUOTA_PERIOD_SECS - 1);
    f.pay(&payer, 1102);
    assert_eq!(f.client.current_period(), 0);

    // One second later the residence is already in arrears.
    set_timestamp(&f.env, QUOTA_PERIOD_SECS);
    assert_eq!(f.client.current_period(), 1);
    assert!(f.client.is_defaulter(&1102));
    f.pay(&payer, 1102);
    assert_eq!(f.client.last_paid_period(&1102), Some(1));
}

#[test]
fn test_resident_in_arrears_cannot_vote() {
    let f = setup();
    let residents = f.add_paying_residents(1);
    f.open_topic("topic 1", Category::Decision, 0, None);

    advance_period(&f.env);
    assert_eq!(
        f.client
            .try_vote(&residents[0], &text(&f.env, "topic 1"), &VoteOption::Yes),
        Err(Ok(Error::MustHavePaidQuota))
    );

    f.pay(&residents[0], 1101);
    f.client
        .vote(&residents[0], &text(&f.env, "topic 1"), &VoteOption::Yes);
    assert_eq!(f.client.number_of_votes(&text(&f.env, "topic 1")), 1);
}

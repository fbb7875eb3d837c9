//! # Condominium Adapter
//!
//! The stable address residents talk to. The adapter owns no ledger state of
//! its own: it remembers an owner and the address of the current Condominium
//! implementation, and forwards every entry point there unchanged.
//!
//! | Entry Point          | Who            | Effect                                  |
//! |----------------------|----------------|-----------------------------------------|
//! | [`CondominiumAdapter::init`]    | deployer | records the owner            |
//! | [`CondominiumAdapter::upgrade`] | owner    | repoints to a new implementation |
//! | `get_impl_address`   | anyone         | current implementation, if any          |
//! | everything else      | as implemented | forwarded with the original caller      |
//!
//! Until the first `upgrade`, every forwarded entry point fails with
//! [`Error::UpgradeRequired`]. Errors raised by the implementation reach the
//! caller with their original code.

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, String};

use condominium_interface::{
    is_null_address, CondominiumApiClient, Category, Error, Topic, TopicStatus, VoteOption,
};

mod storage;


/// Data of the `upgraded` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImplementationSet {
    pub previous: Option<Address>,
    pub implementation: Address,
}

#[contract]
pub struct CondominiumAdapter;

/// Client of the current implementation.
fn implementation(env: &Env) -> Result<CondominiumApiClient<'_>, Error> {
    let address = storage::get_implementation(env).ok_or(Error::UpgradeRequired)?;
    Ok(CondominiumApiClient::new(env, &address))
}

#[contractimpl]
impl CondominiumAdapter {
    /// Record `owner` as the only address allowed to call [`Self::upgrade`].
    pub fn init(env: Env, owner: Address) -> Result<(), Error> {
        if storage::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_owner(&env, &owner);
        Ok(())
    }

    /// Point the adapter at `new_impl`. Owner only; the null address is
    /// refused.
    pub fn upgrade(env: Env, caller: Address, new_impl: Address) -> Result<(), Error> {
        caller.require_auth();
        if caller != storage::get_owner(&env)? {
            return Err(Error::PermissionDenied);
        }
        if is_null_address(&env, &new_impl) {
            return Err(Error::InvalidAddress);
        }

        let previous = storage::get_implementation(&env);
        storage::set_implementation(&env, &new_impl);
        env.events().publish(
            (symbol_short!("upgraded"),),
            ImplementationSet {
                previous,
                implementation: new_impl,
            },
        );
        Ok(())
    }

    pub fn get_impl_address(env: Env) -> Option<Address> {
        storage::get_implementation(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Forwarded mutators
    // ─────────────────────────────────────────────────────────

    pub fn add_resident(
        env: Env,
        caller: Address,
        resident: Address,
        residence_id: u32,
    ) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.add_resident(&caller, &resident, &residence_id);
        Ok(())
    }

    pub fn remove_resident(env: Env, caller: Address, resident: Address) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.remove_resident(&caller, &resident);
        Ok(())
    }

    pub fn set_counselor(
        env: Env,
        caller: Address,
        resident: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.set_counselor(&caller, &resident, &enabled);
        Ok(())
    }

    pub fn add_topic(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        category: Category,
        amount: i128,
        responsible: Option<Address>,
    ) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.add_topic(&caller, &title, &description, &category, &amount, &responsible);
        Ok(())
    }

    pub fn edit_topic(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        amount: i128,
        responsible: Option<Address>,
    ) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.edit_topic(&caller, &title, &description, &amount, &responsible);
        Ok(())
    }

    pub fn remove_topic(env: Env, caller: Address, title: String) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.remove_topic(&caller, &title);
        Ok(())
    }

    pub fn open_voting(env: Env, caller: Address, title: String) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.open_voting(&caller, &title);
        Ok(())
    }

    pub fn vote(env: Env, caller: Address, title: String, option: VoteOption) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.vote(&caller, &title, &option);
        Ok(())
    }

    pub fn close_voting(env: Env, caller: Address, title: String) -> Result<TopicStatus, Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        Ok(condominium.close_voting(&caller, &title))
    }

    pub fn pay_quota(
        env: Env,
        payer: Address,
        residence_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        payer.require_auth();
        condominium.pay_quota(&payer, &residence_id, &amount);
        Ok(())
    }

    pub fn transfer(env: Env, caller: Address, title: String, amount: i128) -> Result<(), Error> {
        let condominium = implementation(&env)?;
        caller.require_auth();
        condominium.transfer(&caller, &title, &amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Forwarded queries
    // ─────────────────────────────────────────────────────────

    pub fn manager(env: Env) -> Result<Address, Error> {
        Ok(implementation(&env)?.manager())
    }

    pub fn monthly_quota(env: Env) -> Result<i128, Error> {
        Ok(implementation(&env)?.monthly_quota())
    }

    pub fn topic_exists(env: Env, title: String) -> Result<bool, Error> {
        Ok(implementation(&env)?.topic_exists(&title))
    }

    pub fn get_topic(env: Env, title: String) -> Result<Option<Topic>, Error> {
        Ok(implementation(&env)?.get_topic(&title))
    }

    pub fn number_of_votes(env: Env, title: String) -> Result<u32, Error> {
        Ok(implementation(&env)?.number_of_votes(&title))
    }

    pub fn is_resident(env: Env, address: Address) -> Result<bool, Error> {
        Ok(implementation(&env)?.is_resident(&address))
    }

    pub fn residence_exists(env: Env, residence_id: u32) -> Result<bool, Error> {
        Ok(implementation(&env)?.residence_exists(&residence_id))
    }

    pub fn counselors(env: Env, address: Address) -> Result<bool, Error> {
        Ok(implementation(&env)?.counselors(&address))
    }
}

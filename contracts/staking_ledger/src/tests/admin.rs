use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, BytesN as _, Events},
    Address, BytesN, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};
use staking_common::constants::NULL_ACCOUNT;
use test_case::test_case;

use super::setup::{
    deploy_staking_ledger_contract, deploy_token_contract, setup, REWARD_PERCENTAGE,
    REWARD_PERIOD, STAKE_WITHDRAWAL_TIMEOUT,
};
use crate::{
    contract::{StakingLedger, StakingLedgerClient},
    errors::ContractError,
};

#[test]
fn initialize_twice_fails() {
    let test = setup();

    assert_eq!(
        test.ledger.try_initialize(
            &test.owner,
            &test.staking_token.address,
            &test.reward_token.address,
            &REWARD_PERCENTAGE,
            &REWARD_PERIOD,
            &STAKE_WITHDRAWAL_TIMEOUT,
        ),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test_case(0, 10, ContractError::PercentageZero ; "zero percentage")]
#[test_case(101, 10, ContractError::PercentageExceedsMax ; "percentage above maximum")]
#[test_case(20, 0, ContractError::PeriodZero ; "zero period")]
fn initialize_validates_parameters(reward_percentage: u32, reward_period: u64, error: ContractError) {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let (staking_token, _) = deploy_token_contract(&env, &owner);
    let (reward_token, _) = deploy_token_contract(&env, &owner);
    let ledger = StakingLedgerClient::new(&env, &env.register(StakingLedger, ()));

    assert_eq!(
        ledger.try_initialize(
            &owner,
            &staking_token.address,
            &reward_token.address,
            &reward_percentage,
            &reward_period,
            &STAKE_WITHDRAWAL_TIMEOUT,
        ),
        Err(Ok(error))
    );
}

#[test]
fn initialize_sets_deployer_as_owner() {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let (staking_token, _) = deploy_token_contract(&env, &owner);
    let (reward_token, _) = deploy_token_contract(&env, &owner);

    let ledger =
        deploy_staking_ledger_contract(&env, &owner, &staking_token.address, &reward_token.address);

    assert_eq!(ledger.owner(), owner);
}

#[test_case(50 ; "valid value")]
#[test_case(0 ; "invalid value")]
fn non_owner_cannot_set_reward_percentage(reward_percentage: u32) {
    let test = setup();
    let bob = Address::generate(&test.env);

    assert_eq!(
        test.ledger.try_set_reward_percentage(&bob, &reward_percentage),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(test.ledger.reward_percentage(), REWARD_PERCENTAGE);
}

#[test_case(50 ; "valid value")]
#[test_case(0 ; "invalid value")]
fn non_owner_cannot_set_reward_period(reward_period: u64) {
    let test = setup();
    let bob = Address::generate(&test.env);

    assert_eq!(
        test.ledger.try_set_reward_period(&bob, &reward_period),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(test.ledger.reward_period(), REWARD_PERIOD);
}

#[test]
fn non_owner_cannot_set_stake_withdrawal_timeout() {
    let test = setup();
    let bob = Address::generate(&test.env);

    assert_eq!(
        test.ledger.try_set_stake_withdrawal_timeout(&bob, &50),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(
        test.ledger.stake_withdrawal_timeout(),
        STAKE_WITHDRAWAL_TIMEOUT
    );
}

#[test]
fn owner_sets_reward_percentage() {
    let test = setup();

    test.ledger.set_reward_percentage(&test.owner, &50);

    assert_eq!(test.ledger.reward_percentage(), 50);
}

#[test]
fn owner_sets_reward_period() {
    let test = setup();

    test.ledger.set_reward_period(&test.owner, &50);

    assert_eq!(test.ledger.reward_period(), 50);
}

#[test]
fn owner_sets_stake_withdrawal_timeout() {
    let test = setup();

    test.ledger.set_stake_withdrawal_timeout(&test.owner, &50);

    assert_eq!(test.ledger.stake_withdrawal_timeout(), 50);
}

#[test_case(0, ContractError::PercentageZero ; "zero")]
#[test_case(101, ContractError::PercentageExceedsMax ; "above maximum")]
fn owner_cannot_set_invalid_reward_percentage(reward_percentage: u32, error: ContractError) {
    let test = setup();

    assert_eq!(
        test.ledger
            .try_set_reward_percentage(&test.owner, &reward_percentage),
        Err(Ok(error))
    );
    assert_eq!(test.ledger.reward_percentage(), REWARD_PERCENTAGE);
}

#[test]
fn owner_cannot_set_zero_reward_period() {
    let test = setup();

    assert_eq!(
        test.ledger.try_set_reward_period(&test.owner, &0),
        Err(Ok(ContractError::PeriodZero))
    );
}

#[test]
fn transfer_ownership_to_null_account_fails() {
    let test = setup();
    let null_account = Address::from_string(&String::from_str(&test.env, NULL_ACCOUNT));

    assert_eq!(
        test.ledger.try_transfer_ownership(&test.owner, &null_account),
        Err(Ok(ContractError::InvalidOwner))
    );
    assert_eq!(test.ledger.owner(), test.owner);
}

#[test]
fn transfer_ownership_to_ledger_fails() {
    let test = setup();

    assert_eq!(
        test.ledger
            .try_transfer_ownership(&test.owner, &test.ledger.address),
        Err(Ok(ContractError::InvalidOwner))
    );
}

#[test]
fn transfer_ownership_hands_over_control() {
    let test = setup();
    let bob = Address::generate(&test.env);

    test.ledger.transfer_ownership(&test.owner, &bob);

    assert_eq!(test.ledger.owner(), bob);
    assert_eq!(
        test.ledger.try_set_reward_percentage(&test.owner, &50),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(
        test.ledger.try_transfer_ownership(&test.owner, &test.owner),
        Err(Ok(ContractError::NotOwner))
    );

    test.ledger.set_reward_percentage(&bob, &50);
    assert_eq!(test.ledger.reward_percentage(), 50);
}

#[test]
fn transfer_ownership_publishes_event() {
    let test = setup();
    let bob = Address::generate(&test.env);

    test.ledger.transfer_ownership(&test.owner, &bob);

    let (contract, topics, data) = test.env.events().all().last().unwrap();
    let expected_topics: Vec<Val> = (
        Symbol::new(&test.env, "ownership_transferred"),
        test.owner.clone(),
    )
        .into_val(&test.env);

    assert_eq!(contract, test.ledger.address);
    assert_eq!(topics, expected_topics);
    assert_eq!(Address::try_from_val(&test.env, &data).unwrap(), bob);
}

#[test]
fn non_owner_cannot_update_code() {
    let test = setup();
    let bob = Address::generate(&test.env);
    let new_wasm_hash = BytesN::<32>::random(&test.env);

    assert_eq!(
        test.ledger.try_update(&bob, &new_wasm_hash),
        Err(Ok(ContractError::NotOwner))
    );
}

use soroban_sdk::{Address, Env, Symbol};

pub struct StakingEvents {}

impl StakingEvents {
    /// Emitted when the ledger is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[staking_token: Address, reward_token: Address]`
    pub fn initialize(env: &Env, owner: Address, staking_token: Address, reward_token: Address) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, (staking_token, reward_token));
    }

    /// Emitted when a user stakes tokens
    ///
    /// - topics - `["stake", user: Address]`
    /// - data - `[amount: i128, ts: u64]`
    pub fn stake(env: &Env, user: Address, amount: i128, ts: u64) {
        let topics = (Symbol::new(env, "stake"), user);
        env.events().publish(topics, (amount, ts));
    }

    /// Emitted when a user withdraws their whole stake
    ///
    /// - topics - `["unstake", user: Address]`
    /// - data - `[amount: i128, ts: u64]`
    pub fn unstake(env: &Env, user: Address, amount: i128, ts: u64) {
        let topics = (Symbol::new(env, "unstake"), user);
        env.events().publish(topics, (amount, ts));
    }

    /// Emitted when a user claims the reward for their stake
    ///
    /// - topics - `["claim", user: Address]`
    /// - data - `[reward: i128, ts: u64]`
    pub fn claim(env: &Env, user: Address, reward: i128, ts: u64) {
        let topics = (Symbol::new(env, "claim"), user);
        env.events().publish(topics, (reward, ts));
    }

    /// - topics - `["reward_percentage", owner: Address]`
    /// - data - `reward_percentage: u32`
    pub fn reward_percentage_updated(env: &Env, owner: Address, reward_percentage: u32) {
        let topics = (Symbol::new(env, "reward_percentage"), owner);
        env.events().publish(topics, reward_percentage);
    }

    /// - topics - `["reward_period", owner: Address]`
    /// - data - `reward_period: u64`
    pub fn reward_period_updated(env: &Env, owner: Address, reward_period: u64) {
        let topics = (Symbol::new(env, "reward_period"), owner);
        env.events().publish(topics, reward_period);
    }

    /// - topics - `["withdrawal_timeout", owner: Address]`
    /// - data - `stake_withdrawal_timeout: u64`
    pub fn stake_withdrawal_timeout_updated(
        env: &Env,
        owner: Address,
        stake_withdrawal_timeout: u64,
    ) {
        let topics = (Symbol::new(env, "withdrawal_timeout"), owner);
        env.events().publish(topics, stake_withdrawal_timeout);
    }

    /// Emitted when the owner hands the ledger over to a new owner
    ///
    /// - topics - `["ownership_transferred", previous_owner: Address]`
    /// - data - `new_owner: Address`
    pub fn ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
        let topics = (Symbol::new(env, "ownership_transferred"), previous_owner);
        env.events().publish(topics, new_owner);
    }
}

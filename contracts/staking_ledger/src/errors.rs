use soroban_sdk::contracterror;
use staking_common::error::ArithmeticError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    #[doc = "Stake called with a non-positive amount"]
    InvalidAmount = 3,
    NothingStaked = 4,
    WithdrawalTimeoutNotElapsed = 5,
    #[doc = "Reward period not elapsed, reward already paid, or reward rounds to zero"]
    NoRewardAvailable = 6,
    NotOwner = 7,
    PercentageZero = 8,
    PercentageExceedsMax = 9,
    PeriodZero = 10,
    InvalidOwner = 11,
    #[doc = "The token contract rejected a transfer (balance or allowance too low)"]
    TransferFailed = 12,
    ArithmeticOverflow = 13,
}

impl From<ArithmeticError> for ContractError {
    fn from(_: ArithmeticError) -> Self {
        ContractError::ArithmeticOverflow
    }
}

pub type StakingResult<T = ()> = Result<T, ContractError>;

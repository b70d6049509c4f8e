use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{env, FunctionError};
use near_sdk_macros::NearSchema;

#[derive(Debug, PartialEq, NearSchema, BorshSerialize, BorshDeserialize)]
#[abi(borsh)]
#[borsh(crate = "near_sdk::borsh")]
pub enum ListingError {
    Unauthorized,
    InvalidProvenanceTag,
    InvalidPrice,
    InvalidPurchaseCount,
    PaymentMismatch,
    DepositNotAllowed,
    CounterOverflow,
}

impl FunctionError for ListingError {
    fn panic(&self) -> ! {
        env::panic_str(match self {
            ListingError::Unauthorized => "Only the deploying account can do this",
            ListingError::InvalidProvenanceTag => "Provenance tag does not match the listing variant",
            ListingError::InvalidPrice => "Price must be greater than zero",
            ListingError::InvalidPurchaseCount => "Purchase count must be greater than zero",
            ListingError::PaymentMismatch => "Attached payment must equal price times count",
            ListingError::DepositNotAllowed => "This action does not accept an attached deposit",
            ListingError::CounterOverflow => "Counter arithmetic overflow",
        })
    }
}

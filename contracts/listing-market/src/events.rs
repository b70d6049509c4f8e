use crate::types::ListingKind;
use near_sdk::json_types::{U128, U64};
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum ListingEvent {
    #[event_version("1.0.0")]
    ListingCreated { kind: ListingKind, owner: AccountId, price: U128 },
    #[event_version("1.0.0")]
    ListingPurchased { buyer: AccountId, count: U64, amount: U128, sold: U64 },
    #[event_version("1.0.0")]
    EngagementRecorded { account: AccountId, counter: String, total: U64 },
    #[event_version("1.0.0")]
    ListingDeleted { beneficiary: AccountId },
    #[event_version("1.0.0")]
    StateMigrated { old_version: String, new_version: String },
}

use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::json_types::{U128, U64};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

use crate::constants::{
    BOOK_ENGAGEMENT_LABELS, BOOK_PROVENANCE_TAG, PRODUCT_ENGAGEMENT_LABELS, PRODUCT_PROVENANCE_TAG,
};

/// Listing variant. Both variants run the same state machine; the kind
/// only selects the provenance tag checked at creation and the wording
/// used for the engagement counters in events and views.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
    NearSchema,
)]
#[serde(crate = "near_sdk::serde", rename_all = "snake_case")]
#[borsh(crate = "near_sdk::borsh")]
#[abi(json, borsh)]
pub enum ListingKind {
    Book,
    Product,
}

impl ListingKind {
    /// Fixed literal the creation call must quote for this variant.
    pub fn provenance_tag(self) -> &'static str {
        match self {
            ListingKind::Book => BOOK_PROVENANCE_TAG,
            ListingKind::Product => PRODUCT_PROVENANCE_TAG,
        }
    }

    /// (positive, negative) counter labels for this variant.
    pub fn engagement_labels(self) -> (&'static str, &'static str) {
        match self {
            ListingKind::Book => BOOK_ENGAGEMENT_LABELS,
            ListingKind::Product => PRODUCT_ENGAGEMENT_LABELS,
        }
    }
}

/// Read-only snapshot of the listing returned by `get_listing`.
#[derive(Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct ListingView {
    pub kind: ListingKind,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: U128,
    pub sold: U64,
    pub likes: U64,
    pub dislikes: U64,
    pub owner: AccountId,
    pub beneficiary: AccountId,
}

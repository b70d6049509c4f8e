use crate::errors::ListingError;
use crate::events::ListingEvent;
use crate::types::{ListingKind, ListingView};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::json_types::{U128, U64};
use near_sdk::serde_json::{Map, Value};
use near_sdk::{env, AccountId};

/// The listing record. One instance per deployed contract account; every
/// field except the monotonic counters is frozen at creation.
#[derive(Debug, BorshSerialize, BorshDeserialize, near_sdk_macros::NearSchema)]
#[borsh(crate = "near_sdk::borsh")]
#[abi(borsh)]
pub struct ListingState {
    pub version: String,
    pub kind: ListingKind,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: u128,
    pub sold: u64,
    pub likes: u64,
    pub dislikes: u64,
    pub owner: AccountId,
    pub beneficiary: AccountId,
}

impl ListingState {
    /// Initializes the full record or fails with nothing written.
    ///
    /// The creation sender becomes both the listing owner and the
    /// beneficiary. The fields stay separate because deletion and payouts
    /// are checked against the beneficiary (the deploying account), never
    /// against `owner`.
    pub fn new(
        kind: ListingKind,
        name: String,
        image: String,
        description: String,
        price: u128,
        provenance_tag: &str,
    ) -> Result<Self, ListingError> {
        if provenance_tag != kind.provenance_tag() {
            return Err(ListingError::InvalidProvenanceTag);
        }
        if price == 0 {
            return Err(ListingError::InvalidPrice);
        }

        let creator = env::predecessor_account_id();
        let state = Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            kind,
            name,
            image,
            description,
            price,
            sold: 0,
            likes: 0,
            dislikes: 0,
            owner: creator.clone(),
            beneficiary: creator.clone(),
        };

        ListingEvent::ListingCreated {
            kind,
            owner: creator,
            price: U128(price),
        }
        .emit();

        Ok(state)
    }

    /// Validates the attached payment against `price * count` and records
    /// the sale. Returns the amount owed to the beneficiary.
    ///
    /// A zero count is rejected outright: the original arithmetic happened
    /// to admit it as a free no-op, but a zero-unit purchase is a
    /// malformed call, not a sale.
    pub fn buy(&mut self, count: u64, attached: u128) -> Result<u128, ListingError> {
        if count == 0 {
            return Err(ListingError::InvalidPurchaseCount);
        }
        let total = self
            .price
            .checked_mul(count as u128)
            .ok_or(ListingError::CounterOverflow)?;
        if attached != total {
            return Err(ListingError::PaymentMismatch);
        }
        self.sold = self
            .sold
            .checked_add(count)
            .ok_or(ListingError::CounterOverflow)?;
        Ok(total)
    }

    /// Bumps the positive counter. No per-account vote tracking: the same
    /// caller may keep counting, matching the deployed behaviour.
    pub fn like(&mut self) -> Result<u64, ListingError> {
        self.likes = self
            .likes
            .checked_add(1)
            .ok_or(ListingError::CounterOverflow)?;
        Ok(self.likes)
    }

    pub fn dislike(&mut self) -> Result<u64, ListingError> {
        self.dislikes = self
            .dislikes
            .checked_add(1)
            .ok_or(ListingError::CounterOverflow)?;
        Ok(self.dislikes)
    }

    /// Deletion is authorized by the deploying account, not the `owner`
    /// field. The two coincide at creation; the check still goes to the
    /// beneficiary on purpose.
    pub fn authorize_deletion(&self, caller: &AccountId) -> Result<(), ListingError> {
        if caller != &self.beneficiary {
            return Err(ListingError::Unauthorized);
        }
        Ok(())
    }

    pub fn view(&self) -> ListingView {
        ListingView {
            kind: self.kind,
            name: self.name.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            price: U128(self.price),
            sold: U64(self.sold),
            likes: U64(self.likes),
            dislikes: U64(self.dislikes),
            owner: self.owner.clone(),
            beneficiary: self.beneficiary.clone(),
        }
    }

    /// Counters keyed by this variant's wording (`likes`/`dislikes` for a
    /// Book, `like`/`unlike` for a Product).
    pub fn engagement(&self) -> Value {
        let (positive, negative) = self.kind.engagement_labels();
        let mut counters = Map::new();
        counters.insert(positive.to_string(), Value::String(self.likes.to_string()));
        counters.insert(negative.to_string(), Value::String(self.dislikes.to_string()));
        Value::Object(counters)
    }

    /// Re-reads state on contract upgrade and restamps the version. No
    /// historical layouts exist yet, so this is a pass-through.
    pub fn migrate() -> Self {
        let mut state = env::state_read::<ListingState>()
            .unwrap_or_else(|| env::panic_str("Failed to read listing state"));
        let old_version = state.version.clone();
        state.version = env!("CARGO_PKG_VERSION").to_string();
        if old_version != state.version {
            ListingEvent::StateMigrated {
                old_version,
                new_version: state.version.clone(),
            }
            .emit();
        }
        state
    }
}

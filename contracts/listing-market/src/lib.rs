//! Marketplace listing contract — one listing record per deployed account,
//! governing creation, purchase settlement, engagement counters, and
//! teardown. Book and Product listings share the state machine; the
//! variant only picks the provenance tag and the counter wording.

use crate::errors::ListingError;
use crate::events::ListingEvent;
use crate::protocol::Action;
use crate::state::ListingState;
use crate::types::{ListingKind, ListingView};
use near_sdk::json_types::U128;
use near_sdk::serde_json::Value;
use near_sdk::{env, near, PanicOnDefault, Promise};

pub mod constants;
mod dispatch;
pub mod errors;
mod events;
pub mod protocol;
pub mod state;
pub mod types;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct ListingContract {
    state: ListingState,
}

#[near]
impl ListingContract {
    /// Creates the listing. Runs at most once per contract account; either
    /// every field is initialized or the call fails with no state written.
    #[init]
    #[handle_result]
    pub fn new(
        kind: ListingKind,
        name: String,
        image: String,
        description: String,
        price: U128,
        provenance_tag: String,
    ) -> Result<Self, ListingError> {
        Ok(Self {
            state: ListingState::new(kind, name, image, description, price.0, &provenance_tag)?,
        })
    }

    /// Unified entry point for buy/like/dislike actions. Any handler error
    /// panics, so the host reverts all writes and returns the deposit.
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, action: Action) -> Result<Value, ListingError> {
        let actor = env::predecessor_account_id();
        self.dispatch_action(action, &actor)
    }

    /// Tears the listing down. Only the deploying account may call this;
    /// state is discarded irreversibly and the remaining balance goes back
    /// to that account.
    #[handle_result]
    pub fn delete_listing(&mut self) -> Result<Promise, ListingError> {
        let caller = env::predecessor_account_id();
        self.state.authorize_deletion(&caller)?;

        ListingEvent::ListingDeleted {
            beneficiary: caller.clone(),
        }
        .emit();
        Ok(Promise::new(env::current_account_id()).delete_account(caller))
    }

    pub fn get_listing(&self) -> ListingView {
        self.state.view()
    }

    pub fn get_price(&self) -> U128 {
        U128(self.state.price)
    }

    /// Counters keyed by the variant's wording (`likes`/`dislikes` for a
    /// Book, `like`/`unlike` for a Product).
    pub fn get_engagement(&self) -> Value {
        self.state.engagement()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        Self {
            state: ListingState::migrate(),
        }
    }
}

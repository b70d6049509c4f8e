//! Action dispatch — maps each `Action` variant to its handler.

use crate::errors::ListingError;
use crate::events::ListingEvent;
use crate::protocol::Action;
use crate::ListingContract;
use near_sdk::json_types::{U128, U64};
use near_sdk::serde_json::{json, Map, Value};
use near_sdk::{env, log, AccountId, NearToken, Promise};

impl ListingContract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor: &AccountId,
    ) -> Result<Value, ListingError> {
        match action {
            Action::Buy { count } => self.internal_buy(actor, count),
            Action::Like => self.internal_like(actor),
            Action::Dislike => self.internal_dislike(actor),
        }
    }

    /// Buy: the attached payment plays the role of the linked transfer in
    /// the original group — same sender as the call by construction; the
    /// handler validates the amount and forwards it to the beneficiary.
    fn internal_buy(&mut self, buyer: &AccountId, count: u64) -> Result<Value, ListingError> {
        let attached = env::attached_deposit().as_yoctonear();
        let amount = self.state.buy(count, attached)?;

        // State is settled before the payout leaves the contract.
        Promise::new(self.state.beneficiary.clone()).transfer(NearToken::from_yoctonear(amount));

        log!("Sold {} unit(s) to {} for {} yoctoNEAR", count, buyer, amount);
        ListingEvent::ListingPurchased {
            buyer: buyer.clone(),
            count: U64(count),
            amount: U128(amount),
            sold: U64(self.state.sold),
        }
        .emit();

        Ok(json!({ "sold": U64(self.state.sold) }))
    }

    fn internal_like(&mut self, actor: &AccountId) -> Result<Value, ListingError> {
        Self::require_no_deposit()?;
        let total = self.state.like()?;
        let label = self.state.kind.engagement_labels().0;
        self.record_engagement(actor, label, total)
    }

    fn internal_dislike(&mut self, actor: &AccountId) -> Result<Value, ListingError> {
        Self::require_no_deposit()?;
        let total = self.state.dislike()?;
        let label = self.state.kind.engagement_labels().1;
        self.record_engagement(actor, label, total)
    }

    fn record_engagement(
        &self,
        actor: &AccountId,
        counter: &str,
        total: u64,
    ) -> Result<Value, ListingError> {
        log!("{} recorded {} (total {})", actor, counter, total);
        ListingEvent::EngagementRecorded {
            account: actor.clone(),
            counter: counter.to_string(),
            total: U64(total),
        }
        .emit();

        let mut result = Map::new();
        result.insert(counter.to_string(), Value::String(total.to_string()));
        Ok(Value::Object(result))
    }

    /// Engagement calls carry no payment; a deposit means the caller built
    /// the wrong transaction shape.
    fn require_no_deposit() -> Result<(), ListingError> {
        if env::attached_deposit().as_yoctonear() > 0 {
            return Err(ListingError::DepositNotAllowed);
        }
        Ok(())
    }
}

//! Action selectors for the unified execute API.

use near_sdk::near;

/// Mutating actions dispatched via `execute`.
///
/// Creation and deletion are not actions: the host routes those through the
/// dedicated init and teardown entry points before any selector is read,
/// matching the original dispatch order. An unknown selector fails
/// deserialization, so the call is rejected before it reaches a handler.
#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Purchase `count` units. The payment must be attached to the call.
    Buy { count: u64 },
    Like,
    /// Product listings call this `unlike`; both spellings select the
    /// same handler.
    #[serde(alias = "unlike")]
    Dislike,
}

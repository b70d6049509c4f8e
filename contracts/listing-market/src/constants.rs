//! Listing-wide constants.

/// Provenance tag a Book listing must quote at creation. Schema/version
/// guard only — the literal proves the client was built against this
/// listing shape, nothing more.
pub const BOOK_PROVENANCE_TAG: &str = "books:uv30";

/// Provenance tag a Product listing must quote at creation.
pub const PRODUCT_PROVENANCE_TAG: &str = "tutorial-marketplace:uv1";

/// Engagement counter wording for Book listings: (positive, negative).
pub const BOOK_ENGAGEMENT_LABELS: (&str, &str) = ("likes", "dislikes");

/// Engagement counter wording for Product listings: (positive, negative).
pub const PRODUCT_ENGAGEMENT_LABELS: (&str, &str) = ("like", "unlike");

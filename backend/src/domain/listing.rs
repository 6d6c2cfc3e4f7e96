//! Listing data model and upload validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Stable listing identifier (database row id).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ListingId(i32);

impl ListingId {
    /// Wrap a raw row id.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw row id for persistence adapters.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    /// Opaque image reference (URL or data URI); storage strategy is out of
    /// scope.
    pub image: String,
    pub contact: String,
    pub category: String,
    pub price: f64,
    pub sold: bool,
}

/// A listing joined with its seller's display email, as shown on detail and
/// account views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingWithSeller {
    #[serde(flatten)]
    pub listing: Listing,
    pub seller_email: String,
}

/// Validation errors returned by [`ListingDraft::try_from_parts`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListingValidationError {
    EmptyTitle,
    EmptyCategory,
    /// Price is negative, NaN, or infinite.
    InvalidPrice { price: f64 },
}

impl fmt::Display for ListingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyCategory => write!(f, "category must not be empty"),
            Self::InvalidPrice { price } => {
                write!(f, "price must be a non-negative number, got {price}")
            }
        }
    }
}

impl std::error::Error for ListingValidationError {}

/// Validated payload for creating a listing.
///
/// ## Invariants
/// - `title` and `category` are trimmed and non-empty.
/// - `price` is finite and non-negative.
///
/// # Examples
/// ```
/// use backend::domain::ListingDraft;
///
/// let draft = ListingDraft::try_from_parts(
///     "Desk", "Solid oak", "img/desk.jpeg", "a@x.com", "home", 19.99,
/// )
/// .unwrap();
/// assert_eq!(draft.price(), 19.99);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    title: String,
    description: String,
    image: String,
    contact: String,
    category: String,
    price: f64,
}

impl ListingDraft {
    /// Construct a draft from raw upload fields.
    pub fn try_from_parts(
        title: &str,
        description: &str,
        image: &str,
        contact: &str,
        category: &str,
        price: f64,
    ) -> Result<Self, ListingValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ListingValidationError::EmptyTitle);
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(ListingValidationError::EmptyCategory);
        }

        if !price.is_finite() || price < 0.0 {
            return Err(ListingValidationError::InvalidPrice { price });
        }

        Ok(Self {
            title: title.to_owned(),
            description: description.to_owned(),
            image: image.to_owned(),
            contact: contact.to_owned(),
            category: category.to_owned(),
            price,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn image(&self) -> &str {
        self.image.as_str()
    }

    pub fn contact(&self) -> &str {
        self.contact.as_str()
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

//! Strongly-typed value objects used by catalog entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, finite
//! non-negative prices, ordered price ranges) so that once a value reaches
//! the domain layer it can be treated as trusted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::pricing::MarketBand;

/// Lower edge of the price band the marketplace accepts.
pub const PRICE_FLOOR: f64 = 50_000.0;
/// Upper edge of the price band the marketplace accepts.
pub const PRICE_CEILING: f64 = 2_000_000.0;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided price is NaN, infinite or negative.
    #[error("price must be a finite, non-negative number")]
    InvalidPrice,
    /// Provided range has its minimum above its maximum.
    #[error("price range minimum exceeds maximum")]
    InvertedPriceRange,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(PropertyId, "Unique identifier for a catalog property.");
id_newtype!(AnnouncementId, "Unique identifier for an announcement.");

/// Finite, non-negative monetary value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Rejects NaN, infinities and negative amounts.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidPrice)
        }
    }

    /// Returns the raw amount.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Ordered `[min, max]` price pair clamped into the marketplace band.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Clamps both bounds into `[PRICE_FLOOR, PRICE_CEILING]` and rejects
    /// inverted inputs.
    pub fn new(min: f64, max: f64) -> Result<Self, TypeConstraintError> {
        Self::with_bounds(min, max, PRICE_FLOOR, PRICE_CEILING)
    }

    /// Same as [`PriceRange::new`] with caller-supplied clamping bounds.
    pub fn with_bounds(
        min: f64,
        max: f64,
        floor: f64,
        ceiling: f64,
    ) -> Result<Self, TypeConstraintError> {
        if !(floor <= ceiling) {
            return Err(TypeConstraintError::InvertedPriceRange);
        }

        let min = Price::new(min)?.get().clamp(floor, ceiling);
        let max = Price::new(max)?.get().clamp(floor, ceiling);

        if min > max {
            return Err(TypeConstraintError::InvertedPriceRange);
        }

        Ok(Self {
            min: Price::new(min)?,
            max: Price::new(max)?,
        })
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    /// Whether a price falls inside the range, boundaries included.
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    /// The positioning band for this range; `None` when the range is a
    /// single point and no guidance can be computed.
    pub fn band(&self) -> Option<MarketBand> {
        MarketBand::new(self.min.get(), self.max.get())
    }
}

/// Externally visible identity of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicId(Uuid);

impl PublicId {
    /// Generate a new random public ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for PublicId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PublicId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl Default for PublicId {
    fn default() -> Self {
        Self::new()
    }
}

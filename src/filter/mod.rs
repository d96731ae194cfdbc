use crate::models::ApartmentListing;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Tri-state furnished constraint; `Any` leaves the dimension open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Furnished {
    #[default]
    Any,
    Furnished,
    Unfurnished,
}

/// Why a criteria set cannot be filtered on. The display text is shown to
/// the user verbatim next to the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Max price must be greater than or equal to min price")]
    PriceRangeInverted,
}

/// The current set of user-chosen filter constraints.
/// Empty fields leave the matching dimension unconstrained, so the default
/// criteria pass every listing through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Minimum price (EGP)
    pub min_price: Option<i64>,
    /// Maximum price (EGP)
    pub max_price: Option<i64>,
    /// Exact bedroom count; 0 selects studios
    pub bedrooms: Option<u32>,
    pub furnished: Furnished,
}

/// One discrete edit to a filter control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterInput {
    MinPrice(Option<i64>),
    MaxPrice(Option<i64>),
    Bedrooms(Option<u32>),
    Furnished(Furnished),
}

impl FilterCriteria {
    /// Apply one control edit. The visible set is recomputed synchronously
    /// after every call, there is no batching of edits.
    pub fn update(&mut self, input: FilterInput) {
        match input {
            FilterInput::MinPrice(value) => self.min_price = value,
            FilterInput::MaxPrice(value) => self.max_price = value,
            FilterInput::Bedrooms(value) => self.bedrooms = value,
            FilterInput::Furnished(value) => self.furnished = value,
        }
    }

    /// A criteria set is invalid exactly when both price bounds are present
    /// and inverted. A single bound on its own is always fine.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if max < min {
                return Err(FilterError::PriceRangeInverted);
            }
        }
        Ok(())
    }

    fn matches(&self, apartment: &ApartmentListing) -> bool {
        if let Some(min) = self.min_price {
            if apartment.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if apartment.price > max {
                return false;
            }
        }
        if let Some(bedrooms) = self.bedrooms {
            // Exact match: the "4+ Bedrooms" control sends 4 and matches
            // only four-bedroom listings
            if apartment.bedrooms != bedrooms {
                return false;
            }
        }
        match self.furnished {
            Furnished::Any => {}
            Furnished::Furnished => {
                if !apartment.furnished {
                    return false;
                }
            }
            Furnished::Unfurnished => {
                if apartment.furnished {
                    return false;
                }
            }
        }
        true
    }
}

/// Compute the visible subset of `listings` under `criteria`.
///
/// Pure function, safe on an empty source, and stable: survivors keep the
/// source collection's order. Invalid criteria fail closed with an empty
/// result so the user never sees a half-filtered set while correcting an
/// inverted price range.
pub fn apply(listings: &[ApartmentListing], criteria: &FilterCriteria) -> Vec<ApartmentListing> {
    if criteria.validate().is_err() {
        debug!("Criteria invalid, suppressing all {} listings", listings.len());
        return Vec::new();
    }

    let visible: Vec<ApartmentListing> = listings
        .iter()
        .filter(|apartment| criteria.matches(apartment))
        .cloned()
        .collect();

    debug!("{} of {} listings match", visible.len(), listings.len());
    visible
}

//! Filtering and sorting for deal listings.
//!
//! [`DealListParams`] is the raw, all-optional parameter set as it arrives in
//! a query string. [`DealQuery`] is the checked form: sort field resolved to a
//! [`SortField`], defaults applied, geo parameters combined. Applying a query
//! never mutates its input.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Deserialize;

use crate::deal::Deal;
use crate::error::CoreError;
use crate::geo::GeoPoint;

/// Search radius used when `lat`/`lng` are given without `radius`.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing deals (`GET /deals`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealListParams {
    pub category: Option<String>,
    pub store: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Description,
    Price,
    StoreName,
    CreatedAt,
    ExpiresAt,
    Category,
    ImageUrl,
}

impl SortField {
    pub const ALL: [SortField; 9] = [
        SortField::Id,
        SortField::Title,
        SortField::Description,
        SortField::Price,
        SortField::StoreName,
        SortField::CreatedAt,
        SortField::ExpiresAt,
        SortField::Category,
        SortField::ImageUrl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Description => "description",
            SortField::Price => "price",
            SortField::StoreName => "store_name",
            SortField::CreatedAt => "created_at",
            SortField::ExpiresAt => "expires_at",
            SortField::Category => "category",
            SortField::ImageUrl => "image_url",
        }
    }

    /// Compare two deals by this field, ascending.
    ///
    /// Absent optional values sort before present ones.
    pub fn compare(self, a: &Deal, b: &Deal) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Description => a.description.cmp(&b.description),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::StoreName => a.store_name.cmp(&b.store_name),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::ExpiresAt => a.expires_at.cmp(&b.expires_at),
            SortField::Category => a.category.cmp(&b.category),
            SortField::ImageUrl => a.image_url.cmp(&b.image_url),
        }
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                let accepted: Vec<&str> = SortField::ALL.iter().map(|f| f.as_str()).collect();
                CoreError::Validation(format!(
                    "sort_by must be one of: {} (got '{s}')",
                    accepted.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` in any letter case is descending; every other value is ascending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.to_lowercase() == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Keep deals within `radius_km` of `center`, boundary included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub center: GeoPoint,
    pub radius_km: f64,
}

// ---------------------------------------------------------------------------
// Checked query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DealQuery {
    pub category: Option<String>,
    pub store: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub near: Option<GeoFilter>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for DealQuery {
    fn default() -> Self {
        Self {
            category: None,
            store: None,
            min_price: None,
            max_price: None,
            near: None,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

impl TryFrom<DealListParams> for DealQuery {
    type Error = CoreError;

    fn try_from(params: DealListParams) -> Result<Self, Self::Error> {
        let sort_by = match params.sort_by.as_deref() {
            Some(name) => name.parse()?,
            None => SortField::CreatedAt,
        };
        let sort_order = params
            .sort_order
            .as_deref()
            .map_or(SortOrder::Desc, SortOrder::parse_lenient);

        // Radius only matters once both coordinates are present.
        let near = match (params.lat, params.lng) {
            (Some(lat), Some(lng)) => {
                if !lat.is_finite() || !lng.is_finite() {
                    return Err(CoreError::Validation(
                        "lat and lng must be finite numbers".into(),
                    ));
                }
                let radius_km = params.radius.unwrap_or(DEFAULT_RADIUS_KM);
                if !radius_km.is_finite() || radius_km < 0.0 {
                    return Err(CoreError::Validation(format!(
                        "radius must be a non-negative number of kilometers (got {radius_km})"
                    )));
                }
                Some(GeoFilter {
                    center: GeoPoint::new(lat, lng),
                    radius_km,
                })
            }
            _ => None,
        };

        for (name, bound) in [("min_price", params.min_price), ("max_price", params.max_price)] {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(CoreError::Validation(format!("{name} must be a finite number")));
            }
        }

        Ok(Self {
            category: params.category.filter(|s| !s.is_empty()),
            store: params.store.filter(|s| !s.is_empty()),
            min_price: params.min_price,
            max_price: params.max_price,
            near,
            sort_by,
            sort_order,
        })
    }
}

impl DealQuery {
    /// Filter and sort `deals`, returning a new list.
    ///
    /// Filters run in order (category, store, min price, max price, radius)
    /// and combine as AND. The sort is stable in both directions: deals with
    /// equal keys keep their relative input order.
    pub fn apply(&self, deals: &[Deal]) -> Vec<Deal> {
        let mut matched: Vec<Deal> = deals.iter().filter(|d| self.matches(d)).cloned().collect();

        let field = self.sort_by;
        match self.sort_order {
            SortOrder::Asc => matched.sort_by(|a, b| field.compare(a, b)),
            SortOrder::Desc => matched.sort_by(|a, b| field.compare(b, a)),
        }

        matched
    }

    fn matches(&self, deal: &Deal) -> bool {
        if let Some(category) = &self.category {
            if !eq_ignore_case(&deal.category, category) {
                return false;
            }
        }
        if let Some(store) = &self.store {
            if !eq_ignore_case(&deal.store_name, store) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| deal.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| deal.price > max) {
            return false;
        }
        if let Some(near) = &self.near {
            if near.center.distance_km(&deal.location) > near.radius_km {
                return false;
            }
        }
        true
    }
}

/// Parse `params` and apply the resulting query to `deals`.
pub fn filter_and_sort(deals: &[Deal], params: DealListParams) -> Result<Vec<Deal>, CoreError> {
    let query = DealQuery::try_from(params)?;
    Ok(query.apply(deals))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

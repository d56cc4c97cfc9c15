//! Request-scoped domain values for nearby item search.

use serde::Serialize;
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Straight-line distance over the raw degree deltas.
    ///
    /// No great-circle correction is applied; the value is only meaningful for
    /// ordering items relative to the same center.
    #[must_use]
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlng = self.longitude - other.longitude;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

/// Axis-aligned lat/lng rectangle plus the center it was built around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub center: Coordinate,
}

impl BoundingBox {
    /// Square box extending `step` degrees from `center` on both axes.
    #[must_use]
    pub fn around(center: Coordinate, step: f64) -> Self {
        let step = step.abs();
        Self {
            min_latitude: center.latitude - step,
            max_latitude: center.latitude + step,
            min_longitude: center.longitude - step,
            max_longitude: center.longitude + step,
            center,
        }
    }

    /// Inclusive containment test on both axes.
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&point.longitude)
    }

    /// True when `other` lies strictly inside this box on every edge.
    #[must_use]
    pub fn strictly_encloses(&self, other: &BoundingBox) -> bool {
        self.min_latitude < other.min_latitude
            && self.max_latitude > other.max_latitude
            && self.min_longitude < other.min_longitude
            && self.max_longitude > other.max_longitude
    }
}

/// A searchable listing as returned by an item store.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub location: Coordinate,
    pub url: String,
    pub images: Vec<String>,
}

/// An [`Item`] annotated with its distance from the search center.
///
/// Callers outside the search see [`SearchResultItem`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub item: Item,
    pub distance: f64,
}

/// Outward-facing shape of a search hit, shared by every boundary that
/// prints or returns results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultItem {
    pub item_name: String,
    pub lat: f64,
    pub lng: f64,
    pub item_url: String,
    pub img_urls: Vec<String>,
}

impl From<RankedItem> for SearchResultItem {
    fn from(ranked: RankedItem) -> Self {
        let item = ranked.item;
        Self {
            item_name: item.name,
            lat: item.location.latitude,
            lng: item.location.longitude,
            item_url: item.url,
            img_urls: item.images,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no search term provided")]
    MissingTerm,
    #[error("no {0} provided")]
    MissingParameter(&'static str),
    #[error("invalid {param} '{value}': {reason}")]
    InvalidCoordinate {
        param: &'static str,
        value: String,
        reason: String,
    },
}

/// A validated search: non-empty term and a finite center coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub term: String,
    pub center: Coordinate,
}

impl SearchRequest {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the term is blank or either coordinate
    /// component is not finite.
    pub fn new(term: impl Into<String>, center: Coordinate) -> Result<Self, ValidationError> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(ValidationError::MissingTerm);
        }
        check_finite("latitude", center.latitude)?;
        check_finite("longitude", center.longitude)?;
        Ok(Self { term, center })
    }

    /// Build a request from raw query-string values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any value is missing, blank or does not
    /// parse as a finite `f64`.
    pub fn from_raw(
        term: Option<&str>,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let term = term
            .filter(|t| !t.trim().is_empty())
            .ok_or(ValidationError::MissingTerm)?;
        let latitude = parse_component("latitude", latitude)?;
        let longitude = parse_component("longitude", longitude)?;
        Self::new(term, Coordinate::new(latitude, longitude))
    }
}

fn parse_component(param: &'static str, raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingParameter(param))?;
    raw.parse::<f64>()
        .map_err(|e| ValidationError::InvalidCoordinate {
            param,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

fn check_finite(param: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidCoordinate {
            param,
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        })
    }
}

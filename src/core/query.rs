//! Cutout query model for the Spatial Data API.
//!
//! Mirrors the server's own validation so bad input is rejected before a
//! request goes out: the API accepts years 2010..=2023 and WGS84
//! coordinates, and answers 400 otherwise.

use thiserror::Error;

/// First year covered by the datasets behind the API.
pub const MIN_YEAR: u16 = 2010;

/// Last year covered by the datasets behind the API.
pub const MAX_YEAR: u16 = 2023;

/// Raster layers exposed under `/cutout/{layer}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Land,
    Gpp,
    Population,
    Precipitation,
    Goat,
    Cattle,
    Sheep,
}

impl Layer {
    /// All layers, in the order the dashboard lists them.
    pub const ALL: [Layer; 7] = [
        Layer::Land,
        Layer::Gpp,
        Layer::Population,
        Layer::Precipitation,
        Layer::Cattle,
        Layer::Goat,
        Layer::Sheep,
    ];

    /// URL path segment under `/cutout/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Land => "land",
            Layer::Gpp => "gpp",
            Layer::Population => "population",
            Layer::Precipitation => "precipitation",
            Layer::Goat => "goat",
            Layer::Cattle => "cattle",
            Layer::Sheep => "sheep",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Layer::ALL.into_iter().find(|layer| layer.as_str() == s)
    }

    /// Human-readable name for selects and captions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Layer::Land => "Land cover",
            Layer::Gpp => "Gross primary production",
            Layer::Population => "Population density",
            Layer::Precipitation => "Precipitation",
            Layer::Goat => "Goat density",
            Layer::Cattle => "Cattle density",
            Layer::Sheep => "Sheep density",
        }
    }
}

/// Validation failures for a cutout query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("year {0} is out of range (2010-2023)")]
    YearOutOfRange(u16),
    #[error("latitude {0} is out of range (-90 to 90)")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is out of range (-180 to 180)")]
    LongitudeOutOfRange(f64),
    #[error("bounding box corners must differ")]
    DegenerateBox,
}

/// Axis-aligned bounding box given as two WGS84 corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lon1: f64,
    pub lat1: f64,
    pub lon2: f64,
    pub lat2: f64,
}

impl BoundingBox {
    pub fn new(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Self {
        Self {
            lon1,
            lat1,
            lon2,
            lat2,
        }
    }

    /// Check both corners against WGS84 bounds and reject empty boxes.
    pub fn validate(&self) -> Result<(), QueryError> {
        for lon in [self.lon1, self.lon2] {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(QueryError::LongitudeOutOfRange(lon));
            }
        }
        for lat in [self.lat1, self.lat2] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(QueryError::LatitudeOutOfRange(lat));
            }
        }
        if self.lon1 == self.lon2 || self.lat1 == self.lat2 {
            return Err(QueryError::DegenerateBox);
        }
        Ok(())
    }
}

/// A request for one raster cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutQuery {
    pub layer: Layer,
    pub bbox: BoundingBox,
    pub year: u16,
}

impl CutoutQuery {
    /// Validate the query and build the API request URL.
    ///
    /// `base` is the API origin without a trailing slash; an empty base
    /// yields a same-origin relative URL.
    pub fn url(&self, base: &str) -> Result<String, QueryError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(QueryError::YearOutOfRange(self.year));
        }
        self.bbox.validate()?;

        Ok(format!(
            "{}/cutout/{}?lon1={}&lat1={}&lon2={}&lat2={}&year={}",
            base,
            self.layer.as_str(),
            self.bbox.lon1,
            self.bbox.lat1,
            self.bbox.lon2,
            self.bbox.lat2,
            self.year,
        ))
    }
}

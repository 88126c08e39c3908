//! Stop record DTOs for the school dataset.
//!
//! The source dataset is a `;`-delimited export with uppercase Spanish
//! headers (CÓDIGO, ESCUELA, REGIONAL, DISTRITO, LATITUD, LONGITUD) and
//! occasional blank or unparseable coordinate cells. The host picks the
//! deserializer; this module supplies the shapes and the cleaning step so
//! only well-formed stops ever reach the planner.

use serde::{Deserialize, Serialize};

use crate::traits::Stop;

/// A stop row as it comes off the wire, before cleaning.
///
/// Coordinates are optional so rows with missing or unparseable cells
/// survive deserialization and can be dropped explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStopRecord {
    #[serde(rename = "CÓDIGO")]
    pub code: String,
    #[serde(rename = "ESCUELA")]
    pub name: String,
    #[serde(rename = "REGIONAL")]
    pub regional: String,
    #[serde(rename = "DISTRITO")]
    pub distrito: String,
    #[serde(rename = "LATITUD")]
    pub lat: Option<f64>,
    #[serde(rename = "LONGITUD")]
    pub lng: Option<f64>,
}

impl RawStopRecord {
    /// Promote a raw row to a plannable stop.
    ///
    /// Returns `None` when either coordinate is missing, non-finite or
    /// outside the valid range (±90 latitude, ±180 longitude).
    pub fn clean(self) -> Option<StopRecord> {
        let lat = self.lat.filter(|v| v.is_finite() && (-90.0..=90.0).contains(v))?;
        let lng = self.lng.filter(|v| v.is_finite() && (-180.0..=180.0).contains(v))?;

        Some(StopRecord {
            code: self.code,
            name: self.name,
            regional: self.regional,
            distrito: self.distrito,
            lat,
            lng,
        })
    }
}

/// A validated school stop.
///
/// `regional` and `distrito` exist only for the host's scope filtering;
/// the planner never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub code: String,
    pub name: String,
    pub regional: String,
    pub distrito: String,
    pub lat: f64,
    pub lng: f64,
}

impl StopRecord {
    /// Whether this stop belongs to the given regional + distrito scope.
    pub fn in_scope(&self, regional: &str, distrito: &str) -> bool {
        self.regional == regional && self.distrito == distrito
    }
}

impl Stop for StopRecord {
    type Id = String;

    fn id(&self) -> &String {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

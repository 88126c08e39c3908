//! Santo Domingo area school locations for realistic test fixtures.
//!
//! Coordinates are spread across the city east to west so longitude-sweep
//! behaviour is visible; the slice itself is deliberately not in sweep
//! order.

use trayecto_planner::record::StopRecord;

/// A named school with coordinates.
#[derive(Debug, Clone)]
pub struct School {
    pub code: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl School {
    pub const fn new(code: &'static str, name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            code,
            name,
            lat,
            lng,
        }
    }

    pub fn to_record(&self) -> StopRecord {
        StopRecord {
            code: self.code.to_string(),
            name: self.name.to_string(),
            regional: "10".to_string(),
            distrito: "01".to_string(),
            lat: self.lat,
            lng: self.lng,
        }
    }
}

// ============================================================================
// Distrito 10-01 (12 schools, input order shuffled relative to longitude)
// ============================================================================

pub const DISTRITO_10_01: &[School] = &[
    School::new("SD-0107", "Escuela Básica Fe y Alegría", 18.4921, -69.9200),
    School::new("SD-0101", "Escuela Primaria Juan Pablo Duarte", 18.4702, -70.0100),
    School::new("SD-0110", "Centro Educativo Las Américas", 18.4858, -69.8750),
    School::new("SD-0104", "Liceo Juan Bosch", 18.5103, -69.9650),
    School::new("SD-0112", "Escuela Básica Los Mina Norte", 18.5011, -69.8450),
    School::new("SD-0102", "Escuela Básica República de Colombia", 18.4810, -69.9950),
    School::new("SD-0108", "Liceo Pedro Henríquez Ureña", 18.4635, -69.9050),
    School::new("SD-0105", "Escuela Primaria Ercilia Pepín", 18.4559, -69.9500),
    School::new("SD-0111", "Liceo Matutino Villa Duarte", 18.4704, -69.8600),
    School::new("SD-0103", "Centro Educativo Salomé Ureña", 18.4950, -69.9800),
    School::new("SD-0109", "Escuela Primaria Rosa Duarte", 18.5220, -69.8900),
    School::new("SD-0106", "Centro Educativo Eugenio María de Hostos", 18.5170, -69.9350),
];

/// All distrito 10-01 schools as validated stop records, in fixture order.
pub fn stop_records() -> Vec<StopRecord> {
    DISTRITO_10_01.iter().map(School::to_record).collect()
}

/// Fixture codes sorted by longitude (west to east).
pub fn codes_by_longitude() -> Vec<String> {
    let mut schools: Vec<&School> = DISTRITO_10_01.iter().collect();
    schools.sort_by(|a, b| a.lng.total_cmp(&b.lng));
    schools.iter().map(|s| s.code.to_string()).collect()
}

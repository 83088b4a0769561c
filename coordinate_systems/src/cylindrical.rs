use serde::{Deserialize, Serialize};

/// Represents a point in cylindrical coordinates: radial distance from the z axis, azimuth
/// about +z from +x in radians, and height along z.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical {
    pub radius: f64,
    pub azimuth: f64,
    pub height: f64,
}

impl Cylindrical {
    pub fn new(radius: f64, azimuth: f64, height: f64) -> Self {
        Self {
            radius,
            azimuth,
            height,
        }
    }
}

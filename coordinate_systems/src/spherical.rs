use serde::{Deserialize, Serialize};

/// Represents a point in spherical (polar) coordinates. Relative to a Cartesian x-y-z
/// coordinate system, azimuth is the right hand rotation angle about +z where +x is 0, and
/// inclination is the angle from the +z axis. Angles are in radians.
/// Values are not normalized; any finite radius or angle is accepted.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    pub radius: f64,
    pub azimuth: f64,
    pub inclination: f64,
}

impl Spherical {
    /// Creates a new `Spherical` instance with the given radius, azimuth, and inclination.
    ///
    /// # Arguments
    ///
    /// * `radius` - The radial distance from the origin.
    /// * `azimuth` - The azimuth angle in radians.
    /// * `inclination` - The inclination angle in radians.
    pub fn new(radius: f64, azimuth: f64, inclination: f64) -> Self {
        Self {
            radius,
            azimuth,
            inclination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    #[test]
    fn test_spherical_from_ron() {
        let spherical: Spherical =
            ron::from_str("(radius: 1.0, azimuth: 2.0, inclination: 3.0)").unwrap();
        assert_eq!(spherical, Spherical::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_spherical_on_z_axis() {
        let v = Vector::try_from(Spherical::new(2.0, PI / 3.0, 0.0)).unwrap();
        let v = v.to_vector3().unwrap();
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_spherical_negative_radius() {
        // a negative radius mirrors the point through the origin
        let v = Vector::try_from(Spherical::new(-1.0, 0.0, PI / 2.0)).unwrap();
        let v = v.to_vector3().unwrap();
        assert_abs_diff_eq!(v, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }
}

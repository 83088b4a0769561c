use crate::decimal::{self, IntoDecimal};
use crate::{CoordinateErrors, cylindrical::Cylindrical, spherical::Spherical};
use bigdecimal::BigDecimal;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Represents a point in Cartesian coordinates with exact decimal components.
///
/// A `Vector` is immutable: arithmetic returns a new value. Components are always finite,
/// since `BigDecimal` has no NaN or infinity and every float input is checked on the way in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector {
    #[serde(deserialize_with = "decimal::deserialize_component")]
    x: BigDecimal,
    #[serde(deserialize_with = "decimal::deserialize_component")]
    y: BigDecimal,
    #[serde(deserialize_with = "decimal::deserialize_component")]
    z: BigDecimal,
}

impl Vector {
    /// Creates a new `Vector` from the given x, y, and z components.
    ///
    /// # Arguments
    ///
    /// * `x` - The x component, as an integer, decimal text, float or decimal.
    /// * `y` - The y component.
    /// * `z` - The z component.
    ///
    /// # Returns
    ///
    /// A `Vector`, or `CoordinateErrors` if a component is not a finite number.
    pub fn new(
        x: impl IntoDecimal,
        y: impl IntoDecimal,
        z: impl IntoDecimal,
    ) -> Result<Self, CoordinateErrors> {
        Ok(Self {
            x: x.into_decimal()?,
            y: y.into_decimal()?,
            z: z.into_decimal()?,
        })
    }

    pub fn from_decimals(x: BigDecimal, y: BigDecimal, z: BigDecimal) -> Self {
        Self { x, y, z }
    }

    /// The fixed point (0, 0, 0) that distances and centers of mass are measured from.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Creates a `Vector` from polar (spherical) coordinates.
    ///
    /// # Arguments
    ///
    /// * `radius` - The radial distance from the origin.
    /// * `inclination` - The angle from the +z axis in radians.
    /// * `azimuth` - The right hand rotation angle about +z from +x in radians.
    pub fn from_polar(radius: f64, inclination: f64, azimuth: f64) -> Result<Self, CoordinateErrors> {
        Self::try_from(Spherical::new(radius, azimuth, inclination))
    }

    /// Creates a `Vector` from cylindrical coordinates. The height becomes z unchanged.
    pub fn from_cylindrical(radius: f64, azimuth: f64, height: f64) -> Result<Self, CoordinateErrors> {
        Self::try_from(Cylindrical::new(radius, azimuth, height))
    }

    pub fn x(&self) -> &BigDecimal {
        &self.x
    }

    pub fn y(&self) -> &BigDecimal {
        &self.y
    }

    pub fn z(&self) -> &BigDecimal {
        &self.z
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// The squared differences are summed exactly; only the square root runs in `f64`,
    /// and its result is captured exactly as a decimal.
    pub fn distance(&self, other: &Vector) -> Result<BigDecimal, CoordinateErrors> {
        let dx = &other.x - &self.x;
        let dy = &other.y - &self.y;
        let dz = &other.z - &self.z;

        let sum = &dx * &dx + &dy * &dy + &dz * &dz;
        decimal::float_sqrt(&sum)
    }

    /// Converts the `Vector` to the nearest `Vector3<f64>`.
    ///
    /// This is lossy; it is meant for float consumers and approximate comparisons.
    pub fn to_vector3(&self) -> Result<Vector3<f64>, CoordinateErrors> {
        Ok(Vector3::new(
            decimal::decimal_to_f64(&self.x)?,
            decimal::decimal_to_f64(&self.y)?,
            decimal::decimal_to_f64(&self.z)?,
        ))
    }
}

impl TryFrom<Vector3<f64>> for Vector {
    type Error = CoordinateErrors;

    fn try_from(v: Vector3<f64>) -> Result<Self, Self::Error> {
        Vector::new(v[0], v[1], v[2])
    }
}

impl TryFrom<Cylindrical> for Vector {
    type Error = CoordinateErrors;

    /// Converts a `Cylindrical` coordinate to a `Vector`.
    ///
    /// The trigonometry runs in `f64`; the results are then captured exactly.
    fn try_from(cyl: Cylindrical) -> Result<Self, Self::Error> {
        let radius = cyl.radius;
        let azimuth = cyl.azimuth;

        let x = radius * azimuth.cos();
        let y = radius * azimuth.sin();
        let z = cyl.height;

        Vector::new(x, y, z)
    }
}

impl TryFrom<Spherical> for Vector {
    type Error = CoordinateErrors;

    /// Converts a `Spherical` coordinate to a `Vector`.
    fn try_from(sph: Spherical) -> Result<Self, Self::Error> {
        let azimuth = sph.azimuth;
        let inclination = sph.inclination;
        let radius = sph.radius;

        let x = radius * inclination.sin() * azimuth.cos();
        let y = radius * inclination.sin() * azimuth.sin();
        let z = radius * inclination.cos();

        Vector::new(x, y, z)
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        Vector::from_decimals(&self.x + &rhs.x, &self.y + &rhs.y, &self.z + &rhs.z)
    }
}

impl Add<Vector> for Vector {
    type Output = Self;

    /// Adds two `Vector`s component-wise. Decimal addition is exact.
    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vector({}, {}, {})",
            self.x.to_plain_string(),
            self.y.to_plain_string(),
            self.z.to_plain_string()
        )
    }
}

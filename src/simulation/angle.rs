//! Angular positions on the orbital plane.
//!
//! Every entity is located by a single angle measured anticlockwise from the
//! reference axis. Angles are kept in degrees and normalized into `[0, 360)`;
//! addition and subtraction wrap around.

use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};

/// An angle in degrees, always normalized into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Self {
        let mut normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round a tiny negative input up to exactly 360.0
        if normalized >= 360.0 {
            normalized = 0.0;
        }
        Self { degrees: normalized }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    pub fn degrees(self) -> f64 {
        self.degrees
    }

    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees + rhs.degrees)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees - rhs.degrees)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°", self.degrees)
    }
}

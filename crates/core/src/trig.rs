//! Precomputed trigonometry at whole-degree resolution. All hexagon geometry
//! works in integer degrees (vertices sit at multiples of 30°), so a lookup
//! table is both faster and more predictable than calling into `f64::sin`
//! over and over.

use crate::{
    error::GridError,
    util::unit::{Point2, Vector2},
};

/// Number of samples in each table, one per whole degree
const DEGREES: usize = 360;

/// Lookup tables for sine, cosine and tangent at every whole degree in
/// `[0, 360)`.
///
/// Only the first quadrant is actually computed. Every other value is
/// derived from it by reflection, which means that angles that are
/// symmetric about an axis get **bit-identical** values, e.g.
/// `cos(150°) == cos(210°)` exactly. Hexagon edge detection relies on this:
/// a vertical edge has two vertices with exactly the same x.
///
/// The table is immutable once built, so one instance can be shared freely
/// (including across threads).
#[derive(Clone, Debug)]
pub struct TrigTable {
    sin: [f64; DEGREES],
    cos: [f64; DEGREES],
    /// `None` at 90° and 270°, where tangent is undefined
    tan: [Option<f64>; DEGREES],
}

impl TrigTable {
    pub fn new() -> Self {
        let mut quadrant = [0.0; 91];
        for (degrees, value) in quadrant.iter_mut().enumerate() {
            *value = (degrees as f64).to_radians().sin();
        }
        // Force exact values on the axes, to avoid float residue
        quadrant[0] = 0.0;
        quadrant[90] = 1.0;

        let reflected_sin = |degrees: usize| match degrees {
            0..=90 => quadrant[degrees],
            91..=180 => quadrant[180 - degrees],
            181..=270 => -quadrant[degrees - 180],
            _ => -quadrant[DEGREES - degrees],
        };

        let mut sin = [0.0; DEGREES];
        let mut cos = [0.0; DEGREES];
        let mut tan = [None; DEGREES];
        for degrees in 0..DEGREES {
            sin[degrees] = reflected_sin(degrees);
            // cos(a) = sin(90 - a)
            cos[degrees] =
                reflected_sin(Self::normalize(90 - degrees as i32) as usize);
        }
        for degrees in 0..DEGREES {
            tan[degrees] = if cos[degrees] == 0.0 {
                None
            } else if sin[degrees] == 0.0 {
                // Avoid ending up with -0 at 180
                Some(0.0)
            } else {
                Some(sin[degrees] / cos[degrees])
            };
        }

        Self { sin, cos, tan }
    }

    /// Reduce any angle (in degrees) to the canonical range `[0, 360)`.
    pub fn normalize(degrees: i32) -> u16 {
        // rem_euclid is never negative, unlike %
        degrees.rem_euclid(DEGREES as i32) as u16
    }

    pub fn sin_deg(&self, degrees: i32) -> f64 {
        self.sin[Self::normalize(degrees) as usize]
    }

    pub fn cos_deg(&self, degrees: i32) -> f64 {
        self.cos[Self::normalize(degrees) as usize]
    }

    /// Tangent of the angle. Fails with [GridError::UndefinedValue] at 90°
    /// and 270° (or any equivalent angle).
    pub fn tan_deg(&self, degrees: i32) -> anyhow::Result<f64> {
        self.tan[Self::normalize(degrees) as usize].ok_or_else(|| {
            GridError::UndefinedValue {
                function: "tan",
                input: degrees as f64,
            }
            .into()
        })
    }

    /// Look up the angle in `[0, 90]` whose sine is `|value|`. If no sample
    /// matches exactly, this returns the lower of the two whole-degree
    /// samples that bracket the value, i.e. the result is floored to the
    /// degree. Fails with [GridError::OutOfRange] if `|value| > 1` (or NaN).
    pub fn inverse_sin(&self, value: f64) -> anyhow::Result<u16> {
        let magnitude = value.abs();
        let out_of_range = || -> anyhow::Error {
            GridError::OutOfRange {
                value: value.to_string(),
                range: "[-1, 1]".into(),
            }
            .into()
        };
        if magnitude > 1.0 {
            return Err(out_of_range());
        }

        // The first quadrant is strictly increasing, so a linear scan
        // will hit either an exact match or a bracket
        if let Some(degrees) = (0..=90).find(|&a| self.sin[a] == magnitude) {
            return Ok(degrees as u16);
        }
        (0..90)
            .find(|&a| self.sin[a] < magnitude && magnitude < self.sin[a + 1])
            .map(|a| a as u16)
            .ok_or_else(out_of_range)
    }

    /// Get the `(dx, dy)` offset of moving `length` units along the given
    /// angle. 0° points right, 90° points **down** (screen space).
    pub fn displacement(&self, degrees: i32, length: f64) -> Vector2 {
        Vector2::new(
            length * self.cos_deg(degrees),
            length * self.sin_deg(degrees),
        )
    }

    /// Get the angle (in whole degrees, `[0, 360)`) of the segment from one
    /// point to another, using the same convention as [Self::displacement].
    /// The result is floored to the degree within its quadrant. Returns 0 if
    /// the two points are identical. Fails with [GridError::OutOfRange] if
    /// either point has a NaN or infinite coordinate.
    pub fn heading(&self, from: Point2, to: Point2) -> anyhow::Result<u16> {
        let offset = from.offset_to(to);
        let length = from.distance_to(to);
        if !length.is_finite() {
            return Err(GridError::OutOfRange {
                value: format!("{} -> {}", from, to),
                range: "finite points".into(),
            }
            .into());
        }
        if length == 0.0 {
            return Ok(0);
        }

        // Rounding in the distance calculation can push this a hair over 1
        let ratio = (offset.y.abs() / length).min(1.0);
        let angle = self.inverse_sin(ratio)? as i32;
        let angle = match (offset.x < 0.0, offset.y < 0.0) {
            (false, false) => angle,
            (true, false) => 180 - angle,
            (true, true) => 180 + angle,
            (false, true) => 360 - angle,
        };
        Ok(Self::normalize(angle))
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_normalize() {
        assert_eq!(TrigTable::normalize(0), 0);
        assert_eq!(TrigTable::normalize(359), 359);
        assert_eq!(TrigTable::normalize(360), 0);
        assert_eq!(TrigTable::normalize(-1), 359);
        assert_eq!(TrigTable::normalize(-360), 0);
        assert_eq!(TrigTable::normalize(725), 5);

        for angle in -1000..1000 {
            let normal = TrigTable::normalize(angle);
            assert!(normal < 360, "{} normalized to {}", angle, normal);
            assert_eq!(normal, TrigTable::normalize(angle + 360));
        }
    }

    #[test]
    fn test_axis_values_are_exact() {
        let table = TrigTable::new();
        assert_eq!(table.sin_deg(0), 0.0);
        assert_eq!(table.sin_deg(180), 0.0);
        assert_eq!(table.sin_deg(90), 1.0);
        assert_eq!(table.sin_deg(270), -1.0);
        assert_eq!(table.cos_deg(90), 0.0);
        assert_eq!(table.cos_deg(270), 0.0);
        assert_eq!(table.cos_deg(0), 1.0);
        assert_eq!(table.cos_deg(180), -1.0);
        assert_eq!(table.tan_deg(0).unwrap(), 0.0);
        assert_eq!(table.tan_deg(180).unwrap(), 0.0);
    }

    #[test]
    fn test_values_match_std() {
        let table = TrigTable::new();
        for degrees in 0..360 {
            let radians = (degrees as f64).to_radians();
            assert_approx_eq!(table.sin_deg(degrees), radians.sin());
            assert_approx_eq!(table.cos_deg(degrees), radians.cos());
        }
        assert_approx_eq!(table.tan_deg(45).unwrap(), 1.0);
        assert_approx_eq!(table.tan_deg(-45).unwrap(), -1.0);
    }

    #[test]
    fn test_reflections_are_exact() {
        let table = TrigTable::new();
        for degrees in 0..=90 {
            assert_eq!(table.sin_deg(degrees), table.sin_deg(180 - degrees));
            assert_eq!(table.cos_deg(degrees), table.cos_deg(-degrees));
        }
        // These two are what make pointy-top hexagons have truly vertical
        // edges
        assert_eq!(table.cos_deg(150), table.cos_deg(210));
        assert_eq!(table.cos_deg(30), table.cos_deg(330));
    }

    #[test]
    fn test_tan_undefined() {
        let table = TrigTable::new();
        for degrees in &[90, 270, -90, 450] {
            let err = table.tan_deg(*degrees).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<GridError>(),
                    Some(GridError::UndefinedValue { function: "tan", .. })
                ),
                "unexpected error for {}: {}",
                degrees,
                err
            );
        }
    }

    #[test]
    fn test_inverse_sin() {
        let table = TrigTable::new();
        // Every sample maps back to itself
        for degrees in 0..=90 {
            assert_eq!(
                table.inverse_sin(table.sin_deg(degrees)).unwrap(),
                degrees as u16
            );
        }
        // Sign is ignored
        assert_eq!(table.inverse_sin(-1.0).unwrap(), 90);
        assert_eq!(table.inverse_sin(-0.5).unwrap(), 30);
        // In-between values floor to the lower sample
        assert_eq!(table.inverse_sin(0.8).unwrap(), 53);
        assert_eq!(
            table.inverse_sin(30.5_f64.to_radians().sin()).unwrap(),
            30
        );

        let err = table.inverse_sin(1.5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::OutOfRange { .. })
        ));
        assert!(table.inverse_sin(f64::NAN).is_err());
    }

    #[test]
    fn test_displacement() {
        let table = TrigTable::new();
        assert_eq!(table.displacement(0, 10.0), Vector2::new(10.0, 0.0));
        assert_eq!(table.displacement(90, 10.0), Vector2::new(0.0, 10.0));
        let diagonal = table.displacement(60, 10.0);
        assert_approx_eq!(diagonal.x, 5.0);
        assert_approx_eq!(diagonal.y, 8.660254037844386);
    }

    #[test]
    fn test_heading() {
        let table = TrigTable::new();
        let origin = Point2::ORIGIN;
        let heading = |to: Point2| table.heading(origin, to).unwrap();
        assert_eq!(heading(origin), 0);
        assert_eq!(heading(Point2::new(1.0, 0.0)), 0);
        assert_eq!(heading(Point2::new(0.0, 1.0)), 90);
        assert_eq!(heading(Point2::new(-1.0, 0.0)), 180);
        assert_eq!(heading(Point2::new(0.0, -1.0)), 270);

        // 3-4-5 triangles in each quadrant. asin(0.8) is ~53.13°
        assert_eq!(heading(Point2::new(3.0, 4.0)), 53);
        assert_eq!(heading(Point2::new(-3.0, 4.0)), 127);
        assert_eq!(heading(Point2::new(-3.0, -4.0)), 233);
        assert_eq!(heading(Point2::new(3.0, -4.0)), 307);
    }

    #[test]
    fn test_heading_not_finite() {
        let table = TrigTable::new();
        for to in &[
            Point2::new(f64::NAN, 1.0),
            Point2::new(1.0, f64::NAN),
            Point2::new(f64::INFINITY, 1.0),
        ] {
            let err = table.heading(Point2::ORIGIN, *to).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<GridError>(),
                    Some(GridError::OutOfRange { .. })
                ),
                "unexpected error for {}: {}",
                to,
                err
            );
        }
    }
}

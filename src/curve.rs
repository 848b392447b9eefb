//! Quality curve module.
//!
//! Stat rolls scale with power level, so a stat rolled at 280 cannot be
//! compared with one rolled at 335 directly. The curve maps a power level
//! to a calibration coefficient, and `normalize` uses the ratio of two
//! coefficients to project a stat onto the reference power level.

use serde::{Deserialize, Serialize};

/// One linear piece of the curve, valid for power levels strictly above
/// `above`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub above: u32,
    pub slope: f64,
    pub intercept: f64,
}

impl CurveSegment {
    fn evaluate(&self, power_level: u32) -> f64 {
        self.slope * f64::from(power_level) + self.intercept
    }
}

/// Power level stats are normalized onto.
pub const REFERENCE_POWER_LEVEL: u32 = 335;

/// Default segments, highest domain first.
pub const DEFAULT_SEGMENTS: [CurveSegment; 2] = [
    CurveSegment {
        above: 300,
        slope: 0.2546,
        intercept: -23.825,
    },
    CurveSegment {
        above: 200,
        slope: 0.1801,
        intercept: -1.4612,
    },
];

/// Piecewise-linear calibration curve.
///
/// Deserializable so the coefficients can be supplied as configuration;
/// `Default` carries the community-derived constants.
///
/// # Examples
///
/// ```rust
/// use gearstat::QualityCurve;
///
/// let curve = QualityCurve::default();
///
/// // Below the curve's domain
/// assert_eq!(curve.scale(200), None);
///
/// // At the reference level a stat is unchanged
/// assert_eq!(curve.normalize(42, 335), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityCurve {
    pub reference_power_level: u32,
    /// Segments ordered by descending `above`.
    pub segments: Vec<CurveSegment>,
}

impl QualityCurve {
    /// Get the calibration coefficient for a power level.
    ///
    /// Returns `None` when the power level is at or below every segment's
    /// domain; such items cannot be normalized.
    pub fn scale(&self, power_level: u32) -> Option<f64> {
        self.segments
            .iter()
            .find(|segment| power_level > segment.above)
            .map(|segment| segment.evaluate(power_level))
    }

    /// Project a stat rolled at `item_power_level` onto the reference
    /// power level.
    ///
    /// Item power levels past the reference level are capped to it.
    /// Returns `None` when the item's power level is outside the curve.
    pub fn normalize(&self, stat_value: i32, item_power_level: u32) -> Option<i32> {
        let reference = self.scale(self.reference_power_level)?;
        let item = self.scale(item_power_level.min(self.reference_power_level))?;
        if item <= 0.0 {
            return None;
        }

        Some((f64::from(stat_value) * (reference / item)).floor() as i32)
    }
}

impl Default for QualityCurve {
    fn default() -> Self {
        Self {
            reference_power_level: REFERENCE_POWER_LEVEL,
            segments: DEFAULT_SEGMENTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_segments() {
        let curve = QualityCurve::default();

        let upper = curve.scale(335).unwrap();
        assert!((upper - 61.466).abs() < 1e-9);

        let lower = curve.scale(300).unwrap();
        assert!((lower - 52.5688).abs() < 1e-9);

        assert!(curve.scale(201).is_some());
        assert_eq!(curve.scale(200), None);
        assert_eq!(curve.scale(0), None);
    }

    #[test]
    fn test_scale_is_increasing() {
        let curve = QualityCurve::default();
        let mut previous = curve.scale(201).unwrap();
        for power in 202..=400 {
            let current = curve.scale(power).unwrap();
            assert!(current > previous, "curve dips at {}", power);
            previous = current;
        }
    }

    #[test]
    fn test_normalize_scales_up_lower_levels() {
        let curve = QualityCurve::default();
        // 4 * (61.466 / 52.5688) = 4.677...
        assert_eq!(curve.normalize(4, 300), Some(4));
        // 40 * 1.16925... = 46.77...
        assert_eq!(curve.normalize(40, 300), Some(46));
    }

    #[test]
    fn test_normalize_caps_at_reference() {
        let curve = QualityCurve::default();
        assert_eq!(curve.normalize(30, 335), Some(30));
        assert_eq!(curve.normalize(30, 350), Some(30));
    }

    #[test]
    fn test_normalize_out_of_domain() {
        let curve = QualityCurve::default();
        assert_eq!(curve.normalize(30, 200), None);
        assert_eq!(curve.normalize(30, 5), None);
    }

    #[test]
    fn test_curve_from_config() {
        let json = r#"{
            "referencePowerLevel": 400,
            "segments": [{ "above": 0, "slope": 1.0, "intercept": 0.0 }]
        }"#;
        let curve: QualityCurve = serde_json::from_str(json).unwrap();
        assert_eq!(curve.scale(10), Some(10.0));
        assert_eq!(curve.normalize(10, 200), Some(20));
    }
}

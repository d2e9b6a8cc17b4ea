//! Manning's-equation reference curve for partially full circular pipes
//!
//! US customary form: `V = (1.486/n) * R^(2/3) * sqrt(S)` with hydraulic
//! radius `R = A/P`. The depth sweep covers 51 equally spaced depths from
//! empty to full pipe. Depths are monotonic; velocities are not necessarily —
//! velocity peaks shortly before the pipe runs full, which is expected
//! hydraulic behavior.

use std::f64::consts::PI;

use crate::app::models::{CurvePoint, ManningsParams};
use crate::constants::{MANNINGS_K, MANNINGS_STEPS};
use crate::{Error, Result};

/// Compute the theoretical depth/velocity curve for the given pipe.
///
/// Fails with [`Error::InvalidGeometry`] when diameter, slope, or roughness
/// is non-finite or not strictly positive.
pub fn generate_curve(params: &ManningsParams) -> Result<Vec<CurvePoint>> {
    validate(params)?;

    let diameter = params.diameter;
    let r = diameter / 2.0;
    let sqrt_slope = params.slope.sqrt();
    let mut points = Vec::with_capacity(MANNINGS_STEPS + 1);

    for i in 0..=MANNINGS_STEPS {
        // Zero depth has zero flow area; emit the origin directly instead of
        // evaluating the 0/0 hydraulic radius.
        if i == 0 {
            points.push(CurvePoint {
                depth: 0.0,
                velocity: 0.0,
            });
            continue;
        }

        let depth = (i as f64 / MANNINGS_STEPS as f64) * diameter;

        let (area, perimeter) = if i == MANNINGS_STEPS {
            // Full pipe
            (PI * r * r, 2.0 * PI * r)
        } else {
            // Central angle subtended by the water surface:
            // depth = r * (1 - cos(theta/2))
            let theta = 2.0 * (((r - depth) / r).clamp(-1.0, 1.0)).acos();
            ((r * r / 2.0) * (theta - theta.sin()), r * theta)
        };

        let radius = area / perimeter;
        let velocity = (MANNINGS_K / params.roughness_n) * radius.powf(2.0 / 3.0) * sqrt_slope;

        points.push(CurvePoint { depth, velocity });
    }

    Ok(points)
}

fn validate(params: &ManningsParams) -> Result<()> {
    let inputs = [
        ("diameter", params.diameter),
        ("slope", params.slope),
        ("roughness n", params.roughness_n),
    ];
    for (name, value) in inputs {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::invalid_geometry(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(diameter: f64, slope: f64, roughness_n: f64) -> ManningsParams {
        ManningsParams {
            diameter,
            slope,
            roughness_n,
        }
    }

    #[test]
    fn test_curve_has_51_points() {
        let curve = generate_curve(&params(1.0, 0.01, 0.013)).unwrap();
        assert_eq!(curve.len(), 51);
    }

    #[test]
    fn test_endpoints() {
        let curve = generate_curve(&params(2.5, 0.004, 0.013)).unwrap();

        assert_eq!(curve[0].depth, 0.0);
        assert_eq!(curve[0].velocity, 0.0);
        assert!((curve[50].depth - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_depths_monotonic_and_velocities_non_negative() {
        let curve = generate_curve(&params(1.5, 0.002, 0.015)).unwrap();

        for pair in curve.windows(2) {
            assert!(pair[1].depth > pair[0].depth);
        }
        for point in &curve {
            assert!(point.velocity >= 0.0);
        }
    }

    #[test]
    fn test_full_pipe_matches_closed_form() {
        // At full pipe R = D/4, so V = (1.486/n) * (D/4)^(2/3) * sqrt(S).
        let p = params(1.0, 0.01, 0.013);
        let curve = generate_curve(&p).unwrap();

        let expected =
            (MANNINGS_K / p.roughness_n) * (p.diameter / 4.0_f64).powf(2.0 / 3.0) * p.slope.sqrt();
        assert!((curve[50].velocity - expected).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_peaks_before_full_pipe() {
        // Hydraulic radius (and so velocity) is larger at 98% depth than at
        // full pipe; the curve is not velocity-monotonic.
        let curve = generate_curve(&params(1.0, 0.01, 0.013)).unwrap();
        assert!(curve[49].velocity > curve[50].velocity);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        for bad in [
            params(0.0, 0.01, 0.013),
            params(1.0, -0.5, 0.013),
            params(1.0, 0.01, 0.0),
            params(f64::NAN, 0.01, 0.013),
            params(1.0, f64::INFINITY, 0.013),
        ] {
            assert!(matches!(
                generate_curve(&bad),
                Err(Error::InvalidGeometry { .. })
            ));
        }
    }
}

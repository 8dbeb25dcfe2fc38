//! Three-circle trilateration.
//!
//! Subtracting the circle equation of the first reading from the other two
//! removes the shared quadratic terms and leaves a 2x2 linear system, solved in
//! closed form. The candidate is then checked against all three original
//! distances, so noisy but consistent readings are accepted within `tolerance`.
//!
//! All arithmetic stays in `f64`; narrowing happens at the HTTP boundary.

use thiserror::Error;

use crate::locator::geometry::{circles_can_intersect, Point, Reading};

/// Below this the linear system is treated as singular.
pub const DETERMINANT_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    /// Circles are numbered 1..=3 in argument order.
    #[error("circles {first} and {second} cannot intersect")]
    PairIncoherent { first: usize, second: usize },

    #[error("reference points are collinear or the system is singular")]
    DegenerateConfiguration,

    #[error(
        "no coherent intersection: max residual {max_residual:.6} > tolerance {tolerance:.6}, \
         residuals {residuals:.6?}"
    )]
    ResidualTooLarge {
        max_residual: f64,
        tolerance: f64,
        residuals: [f64; 3],
    },
}

/// Locates the point whose distances to the three reading centers match the
/// readings within `tolerance` (distance units, expected to be >= 0).
///
/// Reading distances are non-negative by construction of [`Reading`]. A
/// candidate that is not finite is reported as `ResidualTooLarge`.
pub fn solve(
    r1: &Reading,
    r2: &Reading,
    r3: &Reading,
    tolerance: f64,
) -> Result<Point, LocateError> {
    for (first, second, a, b) in [(1, 2, r1, r2), (1, 3, r1, r3), (2, 3, r2, r3)] {
        if !circles_can_intersect(a, b) {
            return Err(LocateError::PairIncoherent { first, second });
        }
    }

    let (p1, p2, p3) = (r1.center(), r2.center(), r3.center());
    let (d1, d2, d3) = (r1.distance(), r2.distance(), r3.distance());

    // A·x + B·y = C
    let a = 2.0 * (p2.x - p1.x);
    let b = 2.0 * (p2.y - p1.y);
    let c = d1 * d1 - d2 * d2 - p1.x * p1.x + p2.x * p2.x - p1.y * p1.y + p2.y * p2.y;

    // D·x + E·y = F
    let d = 2.0 * (p3.x - p1.x);
    let e = 2.0 * (p3.y - p1.y);
    let f = d1 * d1 - d3 * d3 - p1.x * p1.x + p3.x * p3.x - p1.y * p1.y + p3.y * p3.y;

    let den = a * e - b * d;
    if den.abs() < DETERMINANT_EPSILON {
        return Err(LocateError::DegenerateConfiguration);
    }

    let candidate = Point::new((c * e - b * f) / den, (a * f - c * d) / den);

    let residuals = [
        r1.residual(&candidate),
        r2.residual(&candidate),
        r3.residual(&candidate),
    ];
    // NaN (from overflow in the linearization) must win the max, not vanish.
    let max_residual = residuals
        .iter()
        .copied()
        .fold(0.0_f64, |acc, r| if r.is_nan() || r > acc { r } else { acc });

    if max_residual.is_nan() || max_residual > tolerance {
        return Err(LocateError::ResidualTooLarge {
            max_residual,
            tolerance,
            residuals,
        });
    }

    Ok(candidate)
}

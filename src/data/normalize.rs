//! Min-max normalisatie van een reeks meetwaarden naar [0, 1].

/// Relatieve tolerantie waarbinnen minimum en maximum als gelijk gelden.
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Waarde die elk element krijgt als de reeks geen spreiding heeft.
pub const FLAT_VALUE: f64 = 0.5;

/// Schaalt `values` lineair naar [0, 1] op basis van hun eigen minimum en
/// maximum.
///
/// Een lege reeks levert een lege reeks op. Liggen minimum en maximum binnen
/// de tolerantie van elkaar, dan wordt elk element exact [`FLAT_VALUE`].
#[must_use]
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = bounds(values) else {
        return Vec::new();
    };

    if is_close(min, max) {
        return vec![FLAT_VALUE; values.len()];
    }

    // Bij een spreiding voorbij f64::MAX eerst halveren, anders wordt de span inf.
    let (lo, hi, scale) = if (max - min).is_finite() {
        (min, max, 1.0)
    } else {
        (min * 0.5, max * 0.5, 0.5)
    };
    let span = hi - lo;

    values
        .iter()
        .map(|&value| {
            if value == max {
                1.0
            } else {
                ((value * scale - lo) / span).clamp(0.0, 1.0)
            }
        })
        .collect()
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
    )
}

fn is_close(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= RELATIVE_TOLERANCE * a.abs().max(b.abs())
}

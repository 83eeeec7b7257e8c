use super::ParametricCurve3d;
use crate::error::CurveError;
use crate::math::{ArcLengthTable, Point3d};

/// The most points [points_at_spacing] will produce per chord of the table.
pub const MAX_POINTS_PER_STEP: usize = 1024;

/// Finds points along the curve which are `spacing` units of arc length apart,
/// starting at the beginning of the curve.
///
/// The table must have been built from `curve`. Fails if `spacing` would give
/// more than [MAX_POINTS_PER_STEP] points per chord of the table.
pub fn points_at_spacing(
    curve: &impl ParametricCurve3d,
    table: &ArcLengthTable,
    spacing: f64,
) -> Result<Vec<Point3d>, CurveError> {
    if !(spacing > 0.0 && spacing.is_finite()) {
        return Err(CurveError::InvalidSpacing(spacing));
    }
    let count = (table.arc_length() / spacing).floor();
    if count > (table.num_steps() * MAX_POINTS_PER_STEP) as f64 {
        return Err(CurveError::InvalidSpacing(spacing));
    }
    let count = count as usize;
    (0..=count)
        .map(|i| table.length_to_t_clamped(i as f64 * spacing))
        .map(|t| t.map(|t| curve.sample(t)))
        .collect()
}

/// Finds `count` points along the curve with equal arc length between neighbours,
/// including both end points.
///
/// The table must have been built from `curve`.
pub fn uniform_points(
    curve: &impl ParametricCurve3d,
    table: &ArcLengthTable,
    count: usize,
) -> Result<Vec<Point3d>, CurveError> {
    match count {
        0 => Ok(vec![]),
        1 => Ok(vec![curve.sample(curve.bounds().min)]),
        _ => {
            let total = table.arc_length();
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| table.length_to_t_clamped(total * (i as f64 / last)))
                .map(|t| t.map(|t| curve.sample(t)))
                .collect()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::CubicBezier3d;
    use assert_approx_eq::assert_approx_eq;
    use cgmath::prelude::*;

    #[test]
    pub fn spacing_along_line_is_exact() {
        for i in 1..50 {
            let len = 0.1 * i as f64;
            let line = CubicBezier3d::line(Point3d::new(10.0, 10.0, 0.0), Point3d::new(10.0 + len, 10.0, 0.0));
            let table = ArcLengthTable::build(&line, 64).unwrap();
            let points = points_at_spacing(&line, &table, 0.5).unwrap();
            assert_eq!(points.len(), (table.arc_length() / 0.5).floor() as usize + 1);
            for (j, point) in points.iter().enumerate() {
                assert!(!point.x.is_nan() && !point.y.is_nan() && !point.z.is_nan());
                assert_approx_eq!(point.x, 10.0 + 0.5 * j as f64);
            }
        }
    }

    #[test]
    pub fn uniform_points_on_arch() {
        let curve = CubicBezier3d::new(&[
            Point3d::new(1.0, 0.0, 1.0),
            Point3d::new(1.0, 0.0, -1.0),
            Point3d::new(-1.0, 0.0, -1.0),
            Point3d::new(-1.0, 0.0, 1.0),
        ]);
        let table = ArcLengthTable::build(&curve, 256).unwrap();
        let points = uniform_points(&curve, &table, 9).unwrap();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], curve.sample(0.0));
        assert_eq!(points[8], curve.sample(1.0));
        let gaps: Vec<f64> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
        for gap in &gaps {
            assert_approx_eq!(*gap, gaps[0], 0.01);
        }
    }

    #[test]
    pub fn degenerate_counts_and_spacings() {
        let line = CubicBezier3d::line(Point3d::new(0.0, 0.0, 0.0), Point3d::new(1.0, 0.0, 0.0));
        let table = ArcLengthTable::build(&line, 8).unwrap();
        assert!(uniform_points(&line, &table, 0).unwrap().is_empty());
        assert_eq!(uniform_points(&line, &table, 1).unwrap(), vec![Point3d::new(0.0, 0.0, 0.0)]);
        assert_eq!(points_at_spacing(&line, &table, 0.0), Err(CurveError::InvalidSpacing(0.0)));
        assert!(points_at_spacing(&line, &table, f64::NAN).is_err());
        assert_eq!(points_at_spacing(&line, &table, 1e-300), Err(CurveError::InvalidSpacing(1e-300)));
        // 8 chords allow up to 8 * MAX_POINTS_PER_STEP points
        let fine = 2.0 / (8 * MAX_POINTS_PER_STEP) as f64;
        assert!(points_at_spacing(&line, &table, fine).unwrap().len() > 4 * MAX_POINTS_PER_STEP);
        assert!(points_at_spacing(&line, &table, fine / 8.0).is_err());
    }
}

//! Tests that drive a curve the way a host scene would.

use std::sync::mpsc;

use bezier_subdiv::math::{ArcLengthTable, ParametricCurve3d, Point3d};
use bezier_subdiv::{BezierCurve, CurveError};
use cgmath::prelude::*;

fn s_curve() -> [Point3d; 4] {
    [
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(2.0, 3.0, 1.0),
        Point3d::new(4.0, -3.0, 2.0),
        Point3d::new(6.0, 0.0, 0.0),
    ]
}

/// Test that arc length maps back to parameter values monotonically and hits the ends exactly.
#[test]
fn arc_length_parameterisation_is_monotone() {
    let curve = BezierCurve::new(s_curve());
    let total = curve.arc_length().unwrap();
    assert_eq!(curve.arc_length_to_t(0.0), Ok(0.0));
    assert_eq!(curve.arc_length_to_t(total), Ok(1.0));

    let mut t = 0.0;
    for i in 1..=1000 {
        let next_t = curve.arc_length_to_t(total * i as f64 / 1000.0).unwrap();
        assert!(next_t >= t);
        t = next_t;
    }

    let table = curve.table().unwrap();
    for (i, &length) in table.lengths().iter().enumerate() {
        assert_eq!(curve.arc_length_to_t(length), Ok(i as f64 / ArcLengthTable::DEFAULT_STEPS as f64));
    }
}

/// Test that a host can follow the curve at constant speed.
#[test]
fn constant_speed_travel() {
    let curve = BezierCurve::with_steps(s_curve(), 512).unwrap();
    let points = curve.points_at_spacing(0.25).unwrap();
    assert!(points.len() > 2);
    for pair in points.windows(2) {
        assert!((pair[0].distance(pair[1]) - 0.25).abs() < 0.01);
    }
}

/// Test that observers see the rebuilt table and nothing else changes it.
#[test]
fn host_reacts_to_curve_updates() {
    let mut curve = BezierCurve::new(s_curve());
    let (tx, rx) = mpsc::channel();
    curve.on_refresh(move |bezier, table| {
        tx.send((bezier.points()[3], table.arc_length())).unwrap();
    });

    curve.set_control_point(3, Point3d::new(8.0, 0.0, 0.0)).unwrap();
    assert_eq!(curve.point_at_length(0.0), Err(CurveError::TableNotBuilt));
    assert!(rx.try_recv().is_err());

    curve.refresh().unwrap();
    let (end, length) = rx.try_recv().unwrap();
    assert_eq!(end, Point3d::new(8.0, 0.0, 0.0));
    assert_eq!(length, curve.arc_length().unwrap());
    assert_eq!(curve.point(1.0), end);
}

/// Test that the frame moves with the curve and stays orthonormal.
#[test]
fn frames_along_curve() {
    let curve = BezierCurve::new(s_curve());
    for i in 1..20 {
        let t = i as f64 / 20.0;
        let frame = curve.frame(t).unwrap();
        assert!((frame.tangent.magnitude() - 1.0).abs() < 1e-9);
        assert!(frame.tangent.dot(frame.normal).abs() < 1e-9);
        assert!(frame.normal.dot(frame.binormal).abs() < 1e-9);
        assert!(frame.tangent.dot(curve.bezier().sample_dt(t)) > 0.0);
    }
}

/// Test that curves can be evaluated on other threads.
#[test]
fn curves_move_between_threads() {
    let curve = BezierCurve::new(s_curve());
    let handle = std::thread::spawn(move || curve.arc_length().unwrap());
    let length = handle.join().unwrap();
    assert!(length > 6.0);
}

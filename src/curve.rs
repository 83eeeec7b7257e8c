use crate::error::CurveError;
use crate::math::{
    points_at_spacing, uniform_points, ArcLengthTable, CubicBezier3d, Frame, ParametricCurve3d,
    Point3d, Vector3d,
};

/// A callback fired after a curve's arc-length table is rebuilt.
pub type RefreshObserver = Box<dyn FnMut(&CubicBezier3d, &ArcLengthTable) + Send>;

/// Identifies an observer registered with [BezierCurve::on_refresh].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

/// A cubic bezier curve with a cached arc-length table.
///
/// Changing the control points invalidates the table; arc-length queries
/// fail with [CurveError::TableNotBuilt] until [BezierCurve::refresh] is called.
pub struct BezierCurve {
    /// The curve geometry.
    bezier: CubicBezier3d,
    /// The number of chords in the arc-length table.
    num_steps: usize,
    /// The arc-length table, if it is up to date.
    table: Option<ArcLengthTable>,
    /// Callbacks to run after each refresh, in registration order.
    observers: Vec<(ObserverId, RefreshObserver)>,
    /// The next observer ID.
    next_observer: usize,
}

impl BezierCurve {
    /// Creates a curve and builds its arc-length table at the default resolution.
    pub fn new(points: [Point3d; 4]) -> Self {
        let bezier = CubicBezier3d::new(&points);
        let table = ArcLengthTable::with_default_steps(&bezier);
        Self {
            bezier,
            num_steps: ArcLengthTable::DEFAULT_STEPS,
            table: Some(table),
            observers: vec![],
            next_observer: 0,
        }
    }

    /// Creates a curve whose arc-length table has `num_steps` chords.
    pub fn with_steps(points: [Point3d; 4], num_steps: usize) -> Result<Self, CurveError> {
        let bezier = CubicBezier3d::new(&points);
        let table = ArcLengthTable::build(&bezier, num_steps)?;
        Ok(Self {
            bezier,
            num_steps,
            table: Some(table),
            observers: vec![],
            next_observer: 0,
        })
    }

    /// The underlying bezier.
    pub fn bezier(&self) -> &CubicBezier3d {
        &self.bezier
    }

    pub fn control_points(&self) -> &[Point3d; 4] {
        self.bezier.points()
    }

    /// Replaces all four control points. Invalidates the arc-length table.
    pub fn set_control_points(&mut self, points: [Point3d; 4]) {
        self.bezier = CubicBezier3d::new(&points);
        self.table = None;
    }

    /// Moves a single control point. Invalidates the arc-length table.
    pub fn set_control_point(&mut self, idx: usize, point: Point3d) -> Result<(), CurveError> {
        let slot = self
            .bezier
            .points_mut()
            .get_mut(idx)
            .ok_or(CurveError::ControlPointIndex(idx))?;
        *slot = point;
        self.table = None;
        Ok(())
    }

    /// Whether the arc-length table reflects the current control points.
    pub fn is_fresh(&self) -> bool {
        self.table.is_some()
    }

    /// Rebuilds the arc-length table, then notifies observers.
    ///
    /// Observers are not notified if the rebuild fails.
    pub fn refresh(&mut self) -> Result<(), CurveError> {
        let table = self.table.insert(ArcLengthTable::build(&self.bezier, self.num_steps)?);
        log::trace!("curve refreshed, notifying {} observers", self.observers.len());
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.bezier, table);
        }
        Ok(())
    }

    /// Registers a callback to run after every [BezierCurve::refresh].
    pub fn on_refresh(
        &mut self,
        observer: impl FnMut(&CubicBezier3d, &ArcLengthTable) + Send + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregisters a callback. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    pub fn point(&self, t: f64) -> Point3d {
        self.bezier.point(t)
    }

    pub fn tangent(&self, t: f64) -> Result<Vector3d, CurveError> {
        self.bezier.tangent(t)
    }

    pub fn normal(&self, t: f64) -> Result<Vector3d, CurveError> {
        self.bezier.normal(t)
    }

    pub fn binormal(&self, t: f64) -> Result<Vector3d, CurveError> {
        self.bezier.binormal(t)
    }

    pub fn frame(&self, t: f64) -> Result<Frame, CurveError> {
        self.bezier.frame(t)
    }

    /// The arc-length table, if it is up to date.
    pub fn table(&self) -> Result<&ArcLengthTable, CurveError> {
        self.table.as_ref().ok_or(CurveError::TableNotBuilt)
    }

    /// The total length of the curve.
    pub fn arc_length(&self) -> Result<f64, CurveError> {
        Ok(self.table()?.arc_length())
    }

    /// Converts an arc length into a parameter value. See [ArcLengthTable::length_to_t].
    pub fn arc_length_to_t(&self, length: f64) -> Result<f64, CurveError> {
        self.table()?.length_to_t(length)
    }

    /// Converts an arc length into a parameter value, clamping to the curve's extent.
    pub fn arc_length_to_t_clamped(&self, length: f64) -> Result<f64, CurveError> {
        self.table()?.length_to_t_clamped(length)
    }

    /// The point reached after travelling `length` units along the curve.
    pub fn point_at_length(&self, length: f64) -> Result<Point3d, CurveError> {
        Ok(self.point(self.arc_length_to_t(length)?))
    }

    /// Points `spacing` units of arc length apart, starting at `p0`.
    pub fn points_at_spacing(&self, spacing: f64) -> Result<Vec<Point3d>, CurveError> {
        points_at_spacing(&self.bezier, self.table()?, spacing)
    }

    /// `count` points evenly spaced by arc length, including both end points.
    pub fn uniform_points(&self, count: usize) -> Result<Vec<Point3d>, CurveError> {
        uniform_points(&self.bezier, self.table()?, count)
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::new([
            Point3d::new(1.0, 0.0, 1.0),
            Point3d::new(1.0, 0.0, -1.0),
            Point3d::new(-1.0, 0.0, -1.0),
            Point3d::new(-1.0, 0.0, 1.0),
        ])
    }
}

impl std::fmt::Debug for BezierCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BezierCurve")
            .field("bezier", &self.bezier)
            .field("num_steps", &self.num_steps)
            .field("fresh", &self.is_fresh())
            .field("observers", &self.observers.len())
            .finish()
    }
}

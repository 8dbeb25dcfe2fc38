/// A 2D coordinate in double precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A distance measured from a fixed reference point, i.e. a circle of radius
/// `distance` centered at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    center: Point,
    distance: f64,
}

impl Reading {
    /// `distance` must be a non-negative number; callers validate untrusted input.
    pub fn new(center: Point, distance: f64) -> Self {
        debug_assert!(distance >= 0.0, "reading distance must be >= 0, got {distance}");
        Self { center, distance }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Absolute difference between the distance from `candidate` to this
    /// reading's center and the measured distance.
    pub fn residual(&self, candidate: &Point) -> f64 {
        (candidate.distance_to(&self.center) - self.distance).abs()
    }
}

/// Returns false when two circles cannot share a point: too far apart, one
/// strictly inside the other, or coincident (infinitely many intersections).
#[allow(clippy::float_cmp)]
pub fn circles_can_intersect(a: &Reading, b: &Reading) -> bool {
    let d = a.center.distance_to(&b.center);
    let (ra, rb) = (a.distance, b.distance);

    if d > ra + rb {
        return false;
    }
    if d < (ra - rb).abs() {
        return false;
    }
    !(d == 0.0 && ra == rb)
}

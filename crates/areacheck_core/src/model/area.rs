//! Hit-test over the composite target area.
//!
//! # Responsibility
//! - Classify a point as inside ("hit") or outside ("miss") the area built
//!   from three quadrant shapes scaled by `r`.
//!
//! # Invariants
//! - Pure and total over finite inputs; no I/O, no timing.
//! - Boundaries count as hits (all comparisons are non-strict).
//! - `r <= 0` yields an empty area.
//! - Quadrant II holds no shape.

/// One shape of the composite area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Quadrant I triangle below the line `y = -2x + r`.
    Triangle,
    /// Quadrant III rectangle `[-r/2, 0] x [-r, 0]`.
    Rectangle,
    /// Quadrant IV quarter disk of radius `r`.
    QuarterDisk,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Triangle, Region::Rectangle, Region::QuarterDisk];

    /// Whether `(x, y)` lies in this shape for radius `r`.
    ///
    /// Does not check `r > 0`; callers go through [`evaluate`] or
    /// [`regions_containing`] for that.
    pub fn contains(self, x: f64, y: f64, r: f64) -> bool {
        match self {
            Self::Triangle => x >= 0.0 && y >= 0.0 && y <= -2.0 * x + r,
            Self::Rectangle => x <= 0.0 && y <= 0.0 && x >= -r / 2.0 && y >= -r,
            Self::QuarterDisk => x >= 0.0 && y <= 0.0 && x * x + y * y <= r * r,
        }
    }
}

/// Returns `true` when `(x, y)` falls in any shape of the area for `r`.
pub fn evaluate(x: f64, y: f64, r: f64) -> bool {
    if is_empty_area(r) {
        return false;
    }
    Region::ALL.iter().any(|region| region.contains(x, y, r))
}

/// Lists every shape containing `(x, y)`; the origin lies in all three.
pub fn regions_containing(x: f64, y: f64, r: f64) -> Vec<Region> {
    if is_empty_area(r) {
        return Vec::new();
    }
    Region::ALL
        .into_iter()
        .filter(|region| region.contains(x, y, r))
        .collect()
}

fn is_empty_area(r: f64) -> bool {
    r.is_nan() || r <= 0.0
}

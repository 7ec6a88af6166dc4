use serde::{Deserialize, Serialize};

/// Breakpoints of the piecewise-linear membership function for one criterion.
///
/// Each criterion has its own triple, so raw degrees are not comparable
/// across criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

/// Competency test breakpoints.
pub const TEST_BOUNDS: Bounds = Bounds {
    low: 5.0,
    mid: 50.0,
    high: 100.0,
};

/// Soft-skills breakpoints.
pub const SOFT_SKILLS_BOUNDS: Bounds = Bounds {
    low: 20.0,
    mid: 60.0,
    high: 100.0,
};

/// Interview breakpoints.
pub const INTERVIEW_BOUNDS: Bounds = Bounds {
    low: 25.0,
    mid: 50.0,
    high: 100.0,
};

/// Degrees of membership in the low/medium/high linguistic categories.
///
/// Also used for the output rule activation, which has the same shape but is
/// an independent max/min aggregate and does not in general sum to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Maps a raw criterion score onto membership degrees.
///
/// Values outside `[bounds.low, bounds.high]` saturate instead of erroring:
/// anything at or below the low breakpoint is fully `low`, anything at or
/// above the high breakpoint is fully `high`.
pub fn fuzzify(value: f64, bounds: Bounds) -> Membership {
    let value = value.clamp(bounds.low, bounds.high);

    if value <= bounds.low {
        Membership {
            low: 1.0,
            medium: 0.0,
            high: 0.0,
        }
    } else if value <= bounds.mid {
        Membership {
            low: (bounds.mid - value) / (bounds.mid - bounds.low),
            medium: (value - bounds.low) / (bounds.mid - bounds.low),
            high: 0.0,
        }
    } else if value <= bounds.high {
        Membership {
            low: 0.0,
            medium: (bounds.high - value) / (bounds.high - bounds.mid),
            high: (value - bounds.mid) / (bounds.high - bounds.mid),
        }
    } else {
        // Unreachable after the clamp; kept so saturation survives any
        // future relaxation of the clamp.
        Membership {
            low: 0.0,
            medium: 0.0,
            high: 1.0,
        }
    }
}

pub mod adjustment;
pub mod points;

pub use adjustment::{
    compute_adjustments, point_change, AdjustmentRow, AdjustmentSummary, Outcome, OutcomeFlags,
};
pub use points::{lookup_points, PointsAward, PointsBand, POINTS_TABLE};

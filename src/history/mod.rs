mod analytics;
pub mod records;

pub use analytics::{MemberSeries, RatingPoint, Swing, SwingSummary, YearAverage, YearlyAverageRow};
pub use records::{load_records, RatingHistory, RatingRecord};

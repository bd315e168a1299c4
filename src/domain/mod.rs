pub mod boundary;
pub mod field;
pub mod soil;

pub use boundary::{BoundaryPoint, FieldBoundary};
pub use field::FieldRecord;
pub use soil::{Severity, SoilMetric, SoilStatus};

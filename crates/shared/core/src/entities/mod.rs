mod pivot;
mod pivot_type;

pub use pivot::{Pivot, RecordError};
pub use pivot_type::{Direction, PivotType};

//! File Constraint Validation
//!
//! Pure validation of a described file against upload constraints
//! (size, mime type, image dimensions, image ratio). No I/O: the host
//! supplies the file description, the engine reports violations.

mod constraints;

pub use constraints::{
    ConstraintError, FileConstraints, FileDescription, ImageDimensionConstraint, ImageRatio,
    Violation,
};

//! Layout Engine
//!
//! The overflow layout core:
//! - [`break_widths`] - Cumulative width thresholds per visible-item count
//! - [`resolver`] - Moves boundary items between visible/hidden to fit
//! - [`measure`] - Width oracle trait plus the Unicode production oracle
//!
//! The resolver is a pure function over in-memory sequences; widths come in
//! through the [`measure::WidthOracle`] trait so tests can inject them.

pub mod break_widths;
pub mod measure;
pub mod resolver;

pub use break_widths::{build_break_widths, required_space};
pub use measure::{FixedWidths, TextWidths, WidthOracle, display_width, truncate_display};
pub use resolver::{Resolution, resolve};

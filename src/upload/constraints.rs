//! Upload Constraints
//!
//! A file is checked against four independent constraint categories:
//! - size: maximum kilobytes
//! - type: accepted mime types
//! - dimensions: pixel bounds for images (any constraint may match)
//! - ratio: accepted width:height ratios
//!
//! Malformed ratio strings are a programmer-usage error and parse to a
//! typed [`ConstraintError`] instead of failing at validation time.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Tolerance when comparing image ratios.
const RATIO_EPSILON: f32 = 0.001;

/// Errors building constraints.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConstraintError {
    /// Image ratios must look like `"1:2"` with positive numeric parts.
    #[error("image ratios should be formatted as \"1:2\", got {0:?}")]
    MalformedRatio(String),
}

// =============================================================================
// RATIO
// =============================================================================

/// An accepted image aspect ratio, e.g. `2:1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageRatio {
    pub width_ratio: f32,
    pub height_ratio: f32,
}

impl ImageRatio {
    /// The ratio as a single number (width over height).
    pub fn value(&self) -> f32 {
        self.width_ratio / self.height_ratio
    }
}

impl FromStr for ImageRatio {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConstraintError::MalformedRatio(s.to_string());

        let mut parts = s.split(':');
        let width = parts.next().ok_or_else(malformed)?;
        let height = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let width_ratio: f32 = width.trim().parse().map_err(|_| malformed())?;
        let height_ratio: f32 = height.trim().parse().map_err(|_| malformed())?;
        if !(width_ratio > 0.0 && height_ratio > 0.0) {
            return Err(malformed());
        }

        Ok(Self { width_ratio, height_ratio })
    }
}

impl fmt::Display for ImageRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width_ratio, self.height_ratio)
    }
}

// =============================================================================
// DIMENSIONS
// =============================================================================

/// Pixel bounds for an image; a file passes if any constraint matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDimensionConstraint {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl ImageDimensionConstraint {
    /// Exact dimensions.
    pub fn exact(width: u32, height: u32) -> Self {
        Self { min_width: width, max_width: width, min_height: height, max_height: height }
    }

    pub fn matches(&self, width: u32, height: u32) -> bool {
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }
}

// =============================================================================
// CONSTRAINTS & VALIDATION
// =============================================================================

/// The full constraint set for one upload surface.
#[derive(Clone, Debug, Default)]
pub struct FileConstraints {
    /// Accepted mime types. Empty accepts any type.
    pub accepted_types: Vec<String>,
    /// Maximum file size in kilobytes. `None` accepts any size.
    pub max_kilobytes: Option<u32>,
    /// Accepted image dimensions. Empty accepts any dimensions.
    pub dimensions: Vec<ImageDimensionConstraint>,
    /// Accepted image ratios. Empty accepts any ratio.
    pub ratios: Vec<ImageRatio>,
}

impl FileConstraints {
    /// Parse ratio constraint strings (`["2:1", "3:4"]`).
    pub fn with_ratio_strings(mut self, ratios: &[&str]) -> Result<Self, ConstraintError> {
        self.ratios = ratios.iter().map(|r| r.parse()).collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }
}

/// A described file, as supplied by the host (no I/O here).
#[derive(Clone, Debug, PartialEq)]
pub struct FileDescription {
    pub name: String,
    pub mime_type: String,
    pub kilobytes: u32,
    /// Pixel dimensions, for image files.
    pub dimensions: Option<(u32, u32)>,
}

/// One failed constraint category, with what was seen and what was allowed.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    FileSize { actual: u32, max: u32 },
    FileType { actual: String, accepted: Vec<String> },
    ImageDimensions { actual: (u32, u32) },
    ImageRatio { actual: f32 },
}

impl FileConstraints {
    /// Check every category; an empty result means the file is accepted.
    pub fn validate(&self, file: &FileDescription) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(max) = self.max_kilobytes {
            if file.kilobytes > max {
                violations.push(Violation::FileSize { actual: file.kilobytes, max });
            }
        }

        if !self.accepted_types.is_empty() && !self.accepted_types.contains(&file.mime_type) {
            violations.push(Violation::FileType {
                actual: file.mime_type.clone(),
                accepted: self.accepted_types.clone(),
            });
        }

        if let Some((width, height)) = file.dimensions {
            if !self.dimensions.is_empty()
                && !self.dimensions.iter().any(|c| c.matches(width, height))
            {
                violations.push(Violation::ImageDimensions { actual: (width, height) });
            }

            if !self.ratios.is_empty() && height > 0 {
                let actual = width as f32 / height as f32;
                let accepted = self.ratios.iter().any(|r| (actual - r.value()).abs() < RATIO_EPSILON);
                if !accepted {
                    violations.push(Violation::ImageRatio { actual });
                }
            }
        }

        violations
    }
}

// =============================================================================
// TESTS
// =============================================================================

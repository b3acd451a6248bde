//! Chart windowing over a once-fetched index series.
//!
//! The chart loads the full 1951-2024 series once and afterwards only pans
//! its axis when the user picks another period; statistics are re-queried,
//! the series is not. [`ViewState`] is the explicit, caller-owned holder of
//! that series. The index engine never reads it.

use std::fmt;

use crate::config::{MAX_YEAR, MIN_RANGE, MIN_YEAR};
use crate::models::{CpiPoint, CpiRequest};

// ---------------------------------------------------------------------------
// TimeRange
// ---------------------------------------------------------------------------

/// Period presets offered by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Full,
    TwentyYears,
    TenYears,
    FiveYears,
    Custom { start_year: i32, end_year: i32 },
}

impl TimeRange {
    /// The request this preset maps to. The base year is the start year.
    pub fn request(&self) -> CpiRequest {
        let (start, end) = match *self {
            TimeRange::Full => (MIN_YEAR, MAX_YEAR),
            TimeRange::TwentyYears => (MAX_YEAR - 19, MAX_YEAR),
            TimeRange::TenYears => (MAX_YEAR - 9, MAX_YEAR),
            TimeRange::FiveYears => (MAX_YEAR - 4, MAX_YEAR),
            TimeRange::Custom {
                start_year,
                end_year,
            } => (start_year, end_year),
        };
        CpiRequest::new(start, start, end)
    }

    /// Build a custom range after validating it.
    pub fn custom(start_year: Option<i32>, end_year: Option<i32>) -> Result<Self, Vec<RangeViolation>> {
        validate_year_range(start_year, end_year)?;
        match (start_year, end_year) {
            (Some(start_year), Some(end_year)) => Ok(TimeRange::Custom {
                start_year,
                end_year,
            }),
            _ => Err(vec![RangeViolation::Missing]),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    Missing,
    OutOfBounds,
    StartAfterEnd,
    TooShort,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::Missing => write!(f, "Please enter valid years"),
            RangeViolation::OutOfBounds => {
                write!(f, "Years must lie within {}-{}", MIN_YEAR, MAX_YEAR)
            }
            RangeViolation::StartAfterEnd => {
                write!(f, "Start year cannot be later than end year")
            }
            RangeViolation::TooShort => write!(
                f,
                "A range must span at least {} years to be analysed",
                MIN_RANGE
            ),
        }
    }
}

/// Check a user-entered period, reporting every violation found.
///
/// A missing (or zero) year short-circuits the other checks.
pub fn validate_year_range(start_year: Option<i32>, end_year: Option<i32>) -> Result<(), Vec<RangeViolation>> {
    let (start, end) = match (start_year, end_year) {
        (Some(s), Some(e)) if s != 0 && e != 0 => (s, e),
        _ => return Err(vec![RangeViolation::Missing]),
    };

    let mut violations = Vec::new();
    if start < MIN_YEAR || end > MAX_YEAR {
        violations.push(RangeViolation::OutOfBounds);
    }
    if start > end {
        violations.push(RangeViolation::StartAfterEnd);
    }
    if start <= end && span_years(start, end) < i64::from(MIN_RANGE) {
        violations.push(RangeViolation::TooShort);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Inclusive number of years in `start_year..=end_year`, widened so extreme
/// years cannot overflow.
pub fn span_years(start_year: i32, end_year: i32) -> i64 {
    i64::from(end_year) - i64::from(start_year) + 1
}

/// Human-readable description of a period, or `None` if it is not a valid span.
pub fn span_label(start_year: i32, end_year: i32) -> Option<String> {
    if start_year == 0 || end_year == 0 || start_year > end_year {
        return None;
    }
    let count = span_years(start_year, end_year);
    Some(format!("Period: {} - {} ({} years)", start_year, end_year, count))
}

// ---------------------------------------------------------------------------
// ChartWindow
// ---------------------------------------------------------------------------

/// Marker styling for a visible span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub radius: f64,
    pub hover_radius: f64,
    pub border_width: f64,
}

impl PointStyle {
    /// Larger markers for shorter spans.
    pub fn for_span(years: i64) -> Self {
        let (radius, hover_radius, border_width) = match years {
            i64::MIN..=5 => (5.0, 8.0, 3.0),
            6..=10 => (4.0, 7.0, 2.5),
            11..=20 => (3.0, 6.0, 2.0),
            21..=50 => (1.5, 4.0, 1.0),
            _ => (1.0, 3.0, 0.8),
        };
        Self {
            radius,
            hover_radius,
            border_width,
        }
    }
}

/// Upper bound on x-axis ticks for a visible span.
pub fn max_ticks_for_span(years: i64) -> i32 {
    match years {
        i64::MIN..=0 => 1,
        1..=10 => years as i32,
        11..=20 => 10,
        _ => 15,
    }
}

/// Everything the renderer needs to show one period of the loaded series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWindow {
    /// Index into the loaded series of the first visible point.
    pub start_index: usize,
    /// Index into the loaded series of the last visible point.
    pub end_index: usize,
    pub x_min: i32,
    pub x_max: i32,
    pub point_style: PointStyle,
    pub max_ticks: i32,
    pub title: String,
    pub dataset_label: String,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    series: Vec<CpiPoint>,
}

impl ViewState {
    /// Hold a full series (ascending by year) fetched once up front.
    pub fn new(series: Vec<CpiPoint>) -> Self {
        Self { series }
    }

    pub fn series(&self) -> &[CpiPoint] {
        &self.series
    }

    /// `true` until a series has been loaded.
    pub fn needs_fetch(&self) -> bool {
        self.series.is_empty()
    }

    /// Visible slice for a window computed by [`window`](Self::window).
    pub fn visible(&self, window: &ChartWindow) -> &[CpiPoint] {
        self.series
            .get(window.start_index..=window.end_index)
            .unwrap_or(&[])
    }

    /// Re-window the loaded series to `request`'s period without re-fetching.
    ///
    /// Returns `None` when no loaded point falls inside the period, in which
    /// case the caller has to fetch again.
    pub fn window(&self, request: CpiRequest) -> Option<ChartWindow> {
        let CpiRequest {
            base_year,
            start_year,
            end_year,
        } = request;

        let start_index = self.series.iter().position(|p| p.year >= start_year)?;
        let end_index = match self.series.iter().position(|p| p.year > end_year) {
            Some(0) => return None,
            Some(i) => i - 1,
            None => self.series.len() - 1,
        };
        if end_index < start_index {
            return None;
        }

        let span = span_years(start_year, end_year);
        Some(ChartWindow {
            start_index,
            end_index,
            x_min: self.series[start_index].year,
            x_max: self.series[end_index].year,
            point_style: PointStyle::for_span(span),
            max_ticks: max_ticks_for_span(span),
            title: format!(
                "Taiwan Electricity Price CPI ({}-{})",
                start_year, end_year
            ),
            dataset_label: format!("CPI (base year: {})", base_year),
        })
    }
}

use crate::error::{CpiError, Result};
use crate::models::{CpiPoint, PeriodStatistics, PeriodSummary};

use super::round2;

/// Summarize an ascending index series over `start_year..=end_year`.
///
/// `year_over_year_rate` is the mean of every consecutive step's relative
/// change, not the latest step alone; a single-point series has no steps and
/// reports `0`. `max_cpi`/`min_cpi` pass through unrounded.
pub fn aggregate(
    points: &[CpiPoint],
    base_year: i32,
    start_year: i32,
    end_year: i32,
) -> Result<PeriodStatistics> {
    let (first, latest) = match (points.first(), points.last()) {
        (Some(first), Some(latest)) => (first, latest),
        _ => {
            return Err(CpiError::EmptyRange {
                start_year,
                end_year,
            })
        }
    };

    let mut step_total = 0.0;
    for pair in points.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        step_total += percent_change(prev, cur)?;
    }
    let steps = points.len() - 1;
    let year_over_year_rate = if steps == 0 {
        0.0
    } else {
        round2(step_total / steps as f64)
    };

    let count = points.len() as f64;
    let avg_cpi = round2(points.iter().map(|p| p.cpi).sum::<f64>() / count);
    let max_cpi = points.iter().map(|p| p.cpi).fold(f64::NEG_INFINITY, f64::max);
    let min_cpi = points.iter().map(|p| p.cpi).fold(f64::INFINITY, f64::min);
    let total_change = round2(percent_change(first, latest)?);

    Ok(PeriodStatistics {
        latest_cpi: latest.cpi,
        year_over_year_rate,
        base_year,
        period: PeriodSummary {
            start_year,
            end_year,
            avg_cpi,
            max_cpi,
            min_cpi,
            total_change,
        },
        latest_price: latest.price,
        latest_year: latest.year,
    })
}

fn percent_change(from: &CpiPoint, to: &CpiPoint) -> Result<f64> {
    if from.cpi == 0.0 {
        return Err(CpiError::DivisionByZero(format!(
            "index value of {} is zero",
            from.year
        )));
    }
    Ok((to.cpi - from.cpi) / from.cpi * 100.0)
}

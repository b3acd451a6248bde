use crate::error::{CpiError, Result};
use crate::models::{CpiPoint, YearRecord};

use super::round2;

/// Convert average prices into an index relative to `base_year` (= 100).
///
/// The base record is looked up in the whole of `records`, which may be a
/// superset of the period; points are emitted only for years in
/// `start_year..=end_year`, in input order. Each `cpi` is rounded once, after
/// the ratio is scaled.
pub fn derive_cpi(
    records: &[YearRecord],
    base_year: i32,
    start_year: i32,
    end_year: i32,
) -> Result<Vec<CpiPoint>> {
    let base = records
        .iter()
        .find(|r| r.year == base_year)
        .ok_or(CpiError::BaseYearNotFound(base_year))?;

    let base_price = base.total_average_price;
    if base_price == 0.0 {
        return Err(CpiError::DivisionByZero(format!(
            "average price of base year {} is zero",
            base_year
        )));
    }

    Ok(records
        .iter()
        .filter(|r| (start_year..=end_year).contains(&r.year))
        .map(|r| CpiPoint {
            year: r.year,
            price: r.total_average_price,
            cpi: round2(r.total_average_price / base_price * 100.0),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(i32, f64)]) -> Vec<YearRecord> {
        rows.iter().map(|&(y, p)| YearRecord::new(y, p)).collect()
    }

    #[test]
    fn two_point_scenario() {
        let recs = records(&[(1951, 0.16), (2024, 3.28)]);
        let points = derive_cpi(&recs, 1951, 1951, 2024).unwrap();
        assert_eq!(
            points,
            vec![
                CpiPoint { year: 1951, price: 0.16, cpi: 100.0 },
                CpiPoint { year: 2024, price: 3.28, cpi: 2050.0 },
            ]
        );
    }

    #[test]
    fn base_year_is_one_hundred() {
        let recs = records(&[(2000, 1.73), (2001, 1.81), (2002, 1.79), (2003, 1.92)]);
        for base in 2000..=2003 {
            let points = derive_cpi(&recs, base, 2000, 2003).unwrap();
            let at_base = points.iter().find(|p| p.year == base).unwrap();
            assert_eq!(at_base.cpi, 100.0);
            assert_eq!(points.len(), recs.len());
        }
    }

    #[test]
    fn output_is_rounded_and_ordered() {
        let recs = records(&[(1990, 2.07), (1991, 2.11), (1992, 2.13), (1993, 2.17)]);
        let points = derive_cpi(&recs, 1991, 1990, 1993).unwrap();
        for p in &points {
            assert_eq!(round2(p.cpi), p.cpi);
        }
        assert!(points.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(points[0].cpi, 98.1);
        assert_eq!(points[0].price, 2.07);
    }

    #[test]
    fn unsorted_input_keeps_its_order() {
        let recs = records(&[(2003, 2.0), (2001, 1.0), (1999, 4.0), (2002, 1.5)]);
        let points = derive_cpi(&recs, 2001, 2000, 2003).unwrap();
        let years: Vec<i32> = points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2003, 2001, 2002]);
        assert_eq!(points[0].cpi, 200.0);
        assert_eq!(points[2].cpi, 150.0);
    }

    #[test]
    fn missing_base_year_fails() {
        let recs = records(&[(2000, 1.73), (2010, 2.61)]);
        let err = derive_cpi(&recs, 1900, 2000, 2010).unwrap_err();
        assert!(matches!(err, CpiError::BaseYearNotFound(1900)));
    }

    #[test]
    fn zero_base_price_fails() {
        let recs = records(&[(2000, 0.0), (2001, 1.0)]);
        let err = derive_cpi(&recs, 2000, 2000, 2001).unwrap_err();
        assert!(matches!(err, CpiError::DivisionByZero(_)));
    }

    #[test]
    fn base_may_come_from_outside_the_period() {
        let recs = records(&[(1951, 0.5), (1952, 1.0), (1953, 1.5)]);
        let points = derive_cpi(&recs, 1951, 1952, 1953).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].cpi, 200.0);
        assert_eq!(points[1].cpi, 300.0);
    }
}

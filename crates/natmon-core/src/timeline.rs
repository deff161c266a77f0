//! Cumulative timeline used by the page charts

use serde::Serialize;

use crate::record::Monument;

/// One chart step: total records with a year at or before `year`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub year: i32,
    pub total: usize,
}

/// Build the cumulative step function over the snapshot
///
/// Covers every calendar year from the earliest to the latest positive year
/// present, with no gaps; years with no new records repeat the prior total.
/// Records with a 0/unknown year are excluded.
pub fn cumulative_timeline(records: &[Monument]) -> Vec<TimelinePoint> {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).filter(|y| *y > 0).collect();
    years.sort_unstable();
    let (Some(&min), Some(&max)) = (years.first(), years.last()) else {
        return Vec::new();
    };
    let mut points = Vec::with_capacity((max - min) as usize + 1);
    let mut total = 0usize;
    for year in min..=max {
        while total < years.len() && years[total] == year {
            total += 1;
        }
        points.push(TimelinePoint { year, total });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_in_year(year: i32) -> Monument {
        Monument {
            name: format!("m{year}"),
            agency: String::new(),
            president: String::new(),
            states: String::new(),
            date: String::new(),
            year,
            acres: 0.0,
        }
    }

    #[test]
    fn covers_every_year_between_min_and_max() {
        let records: Vec<Monument> = [1906, 1906, 1909, 1911]
            .into_iter()
            .map(record_in_year)
            .collect();
        let points = cumulative_timeline(&records);
        let years: Vec<i32> = points.iter().map(|p| p.year).collect();
        assert_eq!(years, (1906..=1911).collect::<Vec<_>>());
    }

    #[test]
    fn totals_are_monotonically_non_decreasing() {
        let records: Vec<Monument> = [1920, 1906, 1906, 1911, 1908]
            .into_iter()
            .map(record_in_year)
            .collect();
        let points = cumulative_timeline(&records);
        assert!(points.windows(2).all(|w| w[0].total <= w[1].total));
        assert_eq!(points.first().map(|p| p.total), Some(2));
        assert_eq!(points.last().map(|p| p.total), Some(records.len()));
    }

    #[test]
    fn quiet_years_repeat_the_prior_total() {
        let records: Vec<Monument> = [1906, 1908].into_iter().map(record_in_year).collect();
        let points = cumulative_timeline(&records);
        assert_eq!(
            points,
            vec![
                TimelinePoint {
                    year: 1906,
                    total: 1
                },
                TimelinePoint {
                    year: 1907,
                    total: 1
                },
                TimelinePoint {
                    year: 1908,
                    total: 2
                },
            ]
        );
    }

    #[test]
    fn unknown_years_are_excluded() {
        let records: Vec<Monument> = [0, 1906, 0].into_iter().map(record_in_year).collect();
        let points = cumulative_timeline(&records);
        assert_eq!(
            points,
            vec![TimelinePoint {
                year: 1906,
                total: 1
            }]
        );
    }

    #[test]
    fn empty_and_all_unknown_snapshots_yield_no_points() {
        assert!(cumulative_timeline(&[]).is_empty());
        let records = vec![record_in_year(0)];
        assert!(cumulative_timeline(&records).is_empty());
    }
}

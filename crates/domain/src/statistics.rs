use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate};

/// Number of consecutive days with activity ending today.
///
/// A streak that ended yesterday still counts, as today may not be over yet.
#[must_use]
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let days = dates.iter().copied().collect::<BTreeSet<_>>();

    let start = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut day = Some(start);

    while let Some(d) = day {
        if !days.contains(&d) {
            break;
        }
        streak += 1;
        day = d.pred_opt();
    }

    streak
}

#[must_use]
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let days = dates.iter().copied().collect::<BTreeSet<_>>();
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        current = match previous {
            Some(p) if p.succ_opt() == Some(day) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }

    longest
}

/// Count entries per week, keyed by the Monday of the week.
#[must_use]
pub fn weekly_counts(dates: &[NaiveDate]) -> BTreeMap<NaiveDate, u32> {
    let mut result: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    for monday in dates.iter().filter_map(|d| {
        d.checked_sub_days(Days::new(u64::from(d.weekday().num_days_from_monday())))
    }) {
        *result.entry(monday).or_default() += 1;
    }

    result
}

/// Count entries per month, keyed by the first day of the month.
#[must_use]
pub fn monthly_counts(dates: &[NaiveDate]) -> BTreeMap<NaiveDate, u32> {
    let mut result: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    for first in dates.iter().filter_map(|d| d.with_day(1)) {
        *result.entry(first).or_default() += 1;
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub first: (NaiveDate, f32),
    pub latest: (NaiveDate, f32),
    pub change: f32,
}

/// Compare the earliest and the latest value of a series.
///
/// Multiple values on the same day are averaged.
#[must_use]
pub fn progress(series: &[(NaiveDate, f32)]) -> Option<Progress> {
    let daily = daily_averages(series);
    let first = daily.first().copied()?;
    let latest = daily.last().copied()?;

    Some(Progress {
        first,
        latest,
        change: latest.1 - first.1,
    })
}

fn daily_averages(series: &[(NaiveDate, f32)]) -> Vec<(NaiveDate, f32)> {
    let mut days: BTreeMap<NaiveDate, Vec<f32>> = BTreeMap::new();

    for (date, value) in series {
        days.entry(*date).or_default().push(*value);
    }

    #[allow(clippy::cast_precision_loss)]
    days.into_iter()
        .map(|(date, values)| (date, values.iter().sum::<f32>() / values.len() as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn dates(days: &[(i32, u32, u32)]) -> Vec<NaiveDate> {
        days.iter().map(|(y, m, d)| date(*y, *m, *d)).collect()
    }

    #[rstest]
    #[case::no_dates(&[], 0)]
    #[case::today_only(&[(2024, 3, 10)], 1)]
    #[case::ending_today(&[(2024, 3, 8), (2024, 3, 9), (2024, 3, 10)], 3)]
    #[case::ending_yesterday(&[(2024, 3, 7), (2024, 3, 8), (2024, 3, 9)], 3)]
    #[case::broken(&[(2024, 3, 6), (2024, 3, 8)], 0)]
    #[case::gap_before(&[(2024, 3, 1), (2024, 3, 9), (2024, 3, 10), (2024, 3, 10)], 2)]
    #[case::across_month(&[(2024, 2, 29), (2024, 3, 1), (2024, 3, 2)], 3)]
    fn test_current_streak(#[case] days: &[(i32, u32, u32)], #[case] expected: u32) {
        let today = if days.iter().any(|(_, m, _)| *m == 2) {
            date(2024, 3, 2)
        } else {
            date(2024, 3, 10)
        };
        assert_eq!(current_streak(&dates(days), today), expected);
    }

    #[rstest]
    #[case::no_dates(&[], 0)]
    #[case::single(&[(2024, 1, 1)], 1)]
    #[case::unsorted_with_duplicates(
        &[(2024, 1, 3), (2024, 1, 1), (2024, 1, 2), (2024, 1, 2), (2024, 1, 10), (2024, 1, 11)],
        3
    )]
    #[case::year_boundary(&[(2023, 12, 30), (2023, 12, 31), (2024, 1, 1), (2024, 1, 5)], 3)]
    fn test_longest_streak(#[case] days: &[(i32, u32, u32)], #[case] expected: u32) {
        assert_eq!(longest_streak(&dates(days)), expected);
    }

    #[test]
    fn test_weekly_counts() {
        assert_eq!(
            weekly_counts(&dates(&[
                (2024, 3, 4),
                (2024, 3, 6),
                (2024, 3, 10),
                (2024, 3, 11),
                (2024, 1, 1),
            ])),
            BTreeMap::from([
                (date(2024, 1, 1), 1),
                (date(2024, 3, 4), 3),
                (date(2024, 3, 11), 1),
            ])
        );
    }

    #[test]
    fn test_weekly_counts_earliest_date() {
        let counts = weekly_counts(&[NaiveDate::MIN, date(2024, 3, 6)]);
        assert_eq!(counts.get(&date(2024, 3, 4)), Some(&1));
        assert!(counts.len() <= 2);
    }

    #[test]
    fn test_monthly_counts() {
        assert_eq!(
            monthly_counts(&dates(&[(2024, 2, 29), (2024, 2, 1), (2024, 3, 31)])),
            BTreeMap::from([(date(2024, 2, 1), 2), (date(2024, 3, 1), 1)])
        );
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(&[]), None);

        let result = progress(&[
            (date(2024, 1, 10), 72.0),
            (date(2024, 1, 1), 75.0),
            (date(2024, 1, 10), 71.0),
        ])
        .unwrap();
        assert_eq!(result.first, (date(2024, 1, 1), 75.0));
        assert_eq!(result.latest, (date(2024, 1, 10), 71.5));
        assert_approx_eq!(result.change, -3.5);
    }
}

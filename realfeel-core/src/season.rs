use chrono::{DateTime, Datelike, FixedOffset};

use crate::model::Season;

/// Season of an observation, read from the timestamp's own calendar date.
///
/// No timezone conversion happens: `2024-12-01T00:30:00+01:00` is winter even
/// though it is still November in UTC.
pub fn season_of(timestamp: &DateTime<FixedOffset>) -> Season {
    season_for_month(timestamp.month())
}

/// Meteorological seasons, whole months only.
pub fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn boundary_days() {
        assert_eq!(season_of(&ts("2024-12-01T00:00:00+00:00")), Season::Winter);
        assert_eq!(season_of(&ts("2024-03-01T00:00:00+00:00")), Season::Spring);
        assert_eq!(season_of(&ts("2024-06-01T00:00:00+00:00")), Season::Summer);
        assert_eq!(season_of(&ts("2024-09-01T00:00:00+00:00")), Season::Autumn);
        assert_eq!(season_of(&ts("2024-02-29T23:59:59+00:00")), Season::Winter);
        assert_eq!(season_of(&ts("2024-11-30T23:59:59+00:00")), Season::Autumn);
    }

    #[test]
    fn uses_embedded_offset() {
        assert_eq!(season_of(&ts("2024-12-01T00:30:00+01:00")), Season::Winter);
        assert_eq!(season_of(&ts("2024-05-31T23:30:00-05:00")), Season::Spring);
    }

    #[test]
    fn every_day_of_a_leap_year_maps_to_its_month_season() {
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let offset = FixedOffset::east_opt(0).unwrap();

        while day.year() == 2024 {
            let dt = day
                .and_hms_opt(12, 0, 0)
                .unwrap()
                .and_local_timezone(offset)
                .unwrap();

            let expected = match day.month() {
                12 | 1 | 2 => Season::Winter,
                3 | 4 | 5 => Season::Spring,
                6 | 7 | 8 => Season::Summer,
                _ => Season::Autumn,
            };
            assert_eq!(season_of(&dt), expected, "{day}");

            day = day.succ_opt().unwrap();
        }
    }
}

use chrono::{Local, NaiveDate};

/// Source of "today" for day-based queries.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local server time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn local_clock_matches_chrono_local() {
        let before = Local::now().date_naive();
        let today = LocalClock.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}

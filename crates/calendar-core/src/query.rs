use chrono::NaiveDate;

use crate::event::Event;

/// Inclusive date window. A missing bound leaves that side open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Events dated exactly `today`, in input order.
pub fn filter_today(events: Vec<Event>, today: NaiveDate) -> Vec<Event> {
    events.into_iter().filter(|e| e.date == today).collect()
}

/// Events inside `range`, in input order.
pub fn filter_by_range(events: Vec<Event>, range: &DateRange) -> Vec<Event> {
    if range.is_unbounded() {
        return events;
    }
    events.into_iter().filter(|e| range.contains(e.date)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventId;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: i64, date: NaiveDate) -> Event {
        Event {
            id: EventId::from_raw(id),
            name: format!("event {id}"),
            date,
        }
    }

    fn ids(events: &[Event]) -> Vec<i64> {
        events.iter().map(|e| e.id.as_i64()).collect()
    }

    #[test]
    fn today_excludes_neighbouring_days() {
        let today = ymd(2024, 6, 10);
        let events = vec![
            event(1, ymd(2024, 6, 9)),
            event(2, today),
            event(3, ymd(2024, 6, 11)),
            event(4, today),
        ];
        assert_eq!(ids(&filter_today(events, today)), vec![2, 4]);
    }

    #[test]
    fn today_empty_when_nothing_matches() {
        let events = vec![event(1, ymd(2024, 6, 9))];
        assert!(filter_today(events, ymd(2024, 6, 10)).is_empty());
    }

    #[test]
    fn range_includes_inside_excludes_outside() {
        let range = DateRange::between(ymd(2024, 1, 1), ymd(2024, 1, 31));
        let events = vec![event(1, ymd(2024, 1, 15)), event(2, ymd(2024, 2, 1))];
        assert_eq!(ids(&filter_by_range(events, &range)), vec![1]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::between(ymd(2024, 1, 1), ymd(2024, 1, 31));
        let events = vec![
            event(1, ymd(2023, 12, 31)),
            event(2, ymd(2024, 1, 1)),
            event(3, ymd(2024, 1, 31)),
            event(4, ymd(2024, 2, 1)),
        ];
        assert_eq!(ids(&filter_by_range(events, &range)), vec![2, 3]);
    }

    #[test]
    fn unbounded_range_returns_everything() {
        let events = vec![event(1, ymd(1999, 1, 1)), event(2, ymd(2099, 1, 1))];
        assert_eq!(ids(&filter_by_range(events, &DateRange::unbounded())), vec![1, 2]);
    }

    #[test]
    fn start_only_is_half_open() {
        let range = DateRange {
            start: Some(ymd(2024, 3, 5)),
            end: None,
        };
        let events = vec![event(1, ymd(2024, 3, 1)), event(2, ymd(2024, 3, 5)), event(3, ymd(2030, 1, 1))];
        assert_eq!(ids(&filter_by_range(events, &range)), vec![2, 3]);
    }

    #[test]
    fn end_only_is_half_open() {
        let range = DateRange {
            start: None,
            end: Some(ymd(2024, 3, 5)),
        };
        let events = vec![event(1, ymd(2024, 3, 1)), event(2, ymd(2024, 3, 5)), event(3, ymd(2024, 3, 6))];
        assert_eq!(ids(&filter_by_range(events, &range)), vec![1, 2]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = DateRange::between(ymd(2024, 3, 10), ymd(2024, 3, 1));
        let events = vec![event(1, ymd(2024, 3, 5))];
        assert!(filter_by_range(events, &range).is_empty());
    }
}

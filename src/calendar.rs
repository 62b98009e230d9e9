//! Classification des journées (semaine / week-end / férié).
//!
//! Les jours fériés ne sont pas calculés ici : ils sont fournis par
//! l'appelant (fichier CSV, liste régionale, etc.). Un férié tombant un
//! week-end reste un férié.

use crate::model::{Day, DayKind};
use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Jours fériés connus, avec un libellé facultatif.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holidays {
    days: BTreeMap<NaiveDate, String>,
}

impl Holidays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, date: NaiveDate, name: S) {
        self.days.insert(date, name.into());
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<NaiveDate> for Holidays {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut out = Self::new();
        for date in iter {
            out.insert(date, String::new());
        }
        out
    }
}

pub fn classify(date: NaiveDate, holidays: &Holidays) -> DayKind {
    if holidays.contains(date) {
        DayKind::Holiday
    } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        DayKind::Weekend
    } else {
        DayKind::Weekday
    }
}

/// Calendrier classé de `start` à `end` inclus.
pub fn range_calendar(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &Holidays,
) -> Result<Vec<Day>, SchedError> {
    if end < start {
        return Err(SchedError::InvalidRange);
    }
    Ok(start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| Day::new(date, classify(date, holidays)))
        .collect())
}

/// Calendrier classé d'un mois complet.
pub fn month_calendar(year: i32, month: u32, holidays: &Holidays) -> Result<Vec<Day>, SchedError> {
    let (start, end) = month_bounds(year, month)?;
    range_calendar(start, end, holidays)
}

/// Premier et dernier jour du mois.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), SchedError> {
    let invalid = || SchedError::InvalidMonth { year, month };
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
    Ok((start, end))
}

/// Parse `YYYY-MM`.
pub fn parse_month(raw: &str) -> Result<(i32, u32), SchedError> {
    let invalid = || SchedError::Other(anyhow::anyhow!("invalid month {raw:?}, expected YYYY-MM"));
    let (y, m) = raw.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    month_bounds(year, month)?;
    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_has_every_day_once() {
        let cal = month_calendar(2024, 2, &Holidays::new()).unwrap();
        assert_eq!(cal.len(), 29);
        assert_eq!(cal[0].date, date(2024, 2, 1));
        assert_eq!(cal[28].date, date(2024, 2, 29));

        let dec = month_calendar(2025, 12, &Holidays::new()).unwrap();
        assert_eq!(dec.last().unwrap().date, date(2025, 12, 31));
    }

    #[test]
    fn holidays_take_precedence_over_weekends() {
        // 2025-03-01 est un samedi, 2025-03-03 un lundi
        let holidays: Holidays = [date(2025, 3, 1), date(2025, 3, 3)].into_iter().collect();
        let cal = month_calendar(2025, 3, &holidays).unwrap();
        assert_eq!(cal[0].kind, DayKind::Holiday);
        assert_eq!(cal[1].kind, DayKind::Weekend);
        assert_eq!(cal[2].kind, DayKind::Holiday);
        assert_eq!(cal[3].kind, DayKind::Weekday);
    }

    #[test]
    fn rejects_bad_months_and_ranges() {
        assert!(matches!(
            month_calendar(2025, 13, &Holidays::new()),
            Err(SchedError::InvalidMonth { month: 13, .. })
        ));
        assert!(parse_month("2025/03").is_err());
        assert_eq!(parse_month("2025-03").unwrap(), (2025, 3));
        assert!(matches!(
            range_calendar(date(2025, 3, 2), date(2025, 3, 1), &Holidays::new()),
            Err(SchedError::InvalidRange)
        ));
    }
}

#![forbid(unsafe_code)]
use chrono::NaiveDate;
use garde::{io, DayKind, JsonStorage, RosterSchedule, Scheduler, Storage};
use std::fs;
use tempfile::tempdir;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[test]
fn state_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("garde.json")).unwrap();
    assert!(storage.load_or_default().unwrap().rosters.is_empty());

    let mut s = Scheduler::new();
    s.add_roster("first", &["A", "B"]).unwrap();
    let cal = garde::range_calendar(date(3), date(4), &Default::default()).unwrap();
    s.assign("first", &cal).unwrap();
    storage.save(s.rosters()).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(&loaded, s.rosters());
    let b = &loaded.find("first").unwrap().members[1];
    assert_eq!(b.record.last_shift, Some(date(4)));
}

#[test]
fn corrupted_state_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garde.json");
    fs::write(&path, "{ not json").unwrap();
    let storage = JsonStorage::open(&path).unwrap();
    assert!(storage.load_or_default().is_err());
}

#[test]
fn imports_doctors_holidays_and_calendar() {
    let dir = tempdir().unwrap();

    let doctors = dir.path().join("doctors.csv");
    fs::write(&doctors, "roster,doctor\nfirst,YMC\nfirst, WT \nsecond,JCY\n").unwrap();
    let rows = io::import_doctors_csv(&doctors).unwrap();
    assert_eq!(rows[1], ("first".to_string(), "WT".to_string()));
    assert_eq!(rows.len(), 3);

    let holidays = dir.path().join("holidays.csv");
    fs::write(&holidays, "date,name\n2025-04-18,Good Friday\n2025-04-21\n").unwrap();
    let set = io::import_holidays_csv(&holidays).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(
        set.name(NaiveDate::from_ymd_opt(2025, 4, 18).unwrap()),
        Some("Good Friday")
    );

    let calendar = dir.path().join("calendar.csv");
    fs::write(&calendar, "date,kind\n2025-03-03,weekday\n2025-03-08,Weekend\n").unwrap();
    let days = io::import_calendar_csv(&calendar).unwrap();
    assert_eq!(days[1].kind, DayKind::Weekend);
}

#[test]
fn unknown_day_kind_fails_the_import() {
    let dir = tempdir().unwrap();
    let calendar = dir.path().join("calendar.csv");
    fs::write(&calendar, "date,kind\n2025-03-03,bridge\n").unwrap();
    let err = io::import_calendar_csv(&calendar).unwrap_err();
    assert!(format!("{err:#}").contains("invalid day kind: bridge"));
}

#[test]
fn exports_schedule_and_stats_csv() {
    let dir = tempdir().unwrap();
    let mut s = Scheduler::new();
    s.add_roster("solo", &["A"]).unwrap();
    let cal = garde::range_calendar(date(7), date(8), &Default::default()).unwrap();
    let entries = s.assign("solo", &cal).unwrap();

    let sched_path = dir.path().join("schedule.csv");
    let schedules = [RosterSchedule {
        roster: "solo".into(),
        entries,
    }];
    io::export_schedule_csv(&sched_path, &schedules).unwrap();
    let text = fs::read_to_string(&sched_path).unwrap();
    assert_eq!(
        text,
        "roster,date,doctor,kind,fallback\n\
         solo,2025-03-07,A,weekday,false\n\
         solo,2025-03-08,A,weekend,true\n"
    );

    let stats_path = dir.path().join("stats.csv");
    io::export_stats_csv(&stats_path, s.rosters()).unwrap();
    let text = fs::read_to_string(&stats_path).unwrap();
    assert_eq!(
        text,
        "roster,doctor,weekday,weekend,holiday,total\nsolo,A,1,1,0,2\n"
    );
}

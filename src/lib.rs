#![forbid(unsafe_code)]
//! Garde — répartition équitable des gardes médicales (sans BD).
//!
//! - Un médecin par jour et par liste, jamais deux jours de suite (sauf repli).
//! - Équilibrage par type de journée puis par total.
//! - Compteurs cumulés d'un appel à l'autre jusqu'au reset.
//! - État stocké en JSON ; imports/exports CSV.

pub mod calendar;
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod storage;

pub use calendar::{classify, month_calendar, range_calendar, Holidays};
pub use model::{
    Day, DayKind, DoctorId, DoctorRecord, Member, Roster, RosterSchedule, RosterSet,
    ScheduleEntry,
};
pub use report::{collect_stats, render_schedule, render_stats, DoctorStats};
pub use scheduler::{assign, check_rest, reset, RestViolation, SchedError, Scheduler};
pub use storage::{JsonStorage, Storage};

/// Listes par défaut (1re et 2e garde).
pub const DEFAULT_ROSTERS: [(&str, &[&str]); 2] = [
    ("first", &["YMC", "WT", "YY", "Nat", "Ting", "So"]),
    ("second", &["JCY", "HW", "Kel", "HYL", "SC"]),
];

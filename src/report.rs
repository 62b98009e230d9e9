use crate::model::{RosterSet, ScheduleEntry};
use std::fmt::Write as _;

/// Ligne de statistiques d'un médecin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorStats {
    pub roster: String,
    pub doctor: String,
    pub weekday: u32,
    pub weekend: u32,
    pub holiday: u32,
    pub total: u32,
}

/// Projection directe des compteurs, listes et médecins dans l'ordre déclaré.
pub fn collect_stats(set: &RosterSet) -> Vec<DoctorStats> {
    set.rosters
        .iter()
        .flat_map(|roster| {
            roster.members.iter().map(move |m| DoctorStats {
                roster: roster.name.clone(),
                doctor: m.id.as_str().to_string(),
                weekday: m.record.weekday,
                weekend: m.record.weekend,
                holiday: m.record.holiday,
                total: m.record.total(),
            })
        })
        .collect()
}

/// Une ligne par jour : `Mon 03 Mar: YMC (weekday)`.
pub fn render_schedule(entries: &[ScheduleEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = write!(
            out,
            "{}: {} ({})",
            e.date.format("%a %d %b"),
            e.doctor,
            e.kind
        );
        if e.fallback {
            out.push_str(" [repos non respecté]");
        }
        out.push('\n');
    }
    out
}

/// Tableau texte ; le maximum de chaque colonne est suffixé par `*`.
pub fn render_stats(rows: &[DoctorStats]) -> String {
    let maxima = [
        column_max(rows, |r| r.weekday),
        column_max(rows, |r| r.weekend),
        column_max(rows, |r| r.holiday),
        column_max(rows, |r| r.total),
    ];

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<8} {:>8} {:>8} {:>8} {:>8}",
        "list", "doctor", "weekday", "weekend", "holiday", "total"
    );
    for r in rows {
        let cells: Vec<String> = [r.weekday, r.weekend, r.holiday, r.total]
            .iter()
            .zip(maxima)
            .map(|(v, m)| {
                if *v == m && m > 0 {
                    format!("{v}*")
                } else {
                    v.to_string()
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "{:<8} {:<8} {:>8} {:>8} {:>8} {:>8}",
            r.roster, r.doctor, cells[0], cells[1], cells[2], cells[3]
        );
    }
    out
}

fn column_max(rows: &[DoctorStats], f: impl Fn(&DoctorStats) -> u32) -> u32 {
    rows.iter().map(f).max().unwrap_or(0)
}

use crate::calendar::Holidays;
use crate::model::{Day, DayKind, RosterSchedule, RosterSet};
use crate::report::collect_stats;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de médecins : header `roster,doctor`, ordre des lignes = ordre de déclaration.
pub fn import_doctors_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<(String, String)>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let roster = rec.get(0).context("missing roster")?.trim();
        let doctor = rec.get(1).context("missing doctor")?.trim();
        if roster.is_empty() || doctor.is_empty() {
            bail!("invalid doctor row (empty)");
        }
        out.push((roster.to_string(), doctor.to_string()));
    }
    Ok(out)
}

/// Import de jours fériés : header `date[,name]` (YYYY-MM-DD)
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Holidays> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Holidays::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = parse_date(rec.get(0).context("missing date")?)?;
        let name = rec.get(1).map(str::trim).unwrap_or("");
        out.insert(date, name);
    }
    Ok(out)
}

/// Import d'un calendrier déjà classé : header `date,kind`
pub fn import_calendar_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Day>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = parse_date(rec.get(0).context("missing date")?)?;
        let kind: DayKind = rec
            .get(1)
            .context("missing kind")?
            .parse()
            .with_context(|| format!("invalid kind for {date}"))?;
        out.push(Day::new(date, kind));
    }
    Ok(out)
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

/// Export JSON de l'état (jolie mise en forme)
pub fn export_state_json<P: AsRef<Path>>(path: P, set: &RosterSet) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(set)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des plannings : header `roster,date,doctor,kind,fallback`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedules: &[RosterSchedule],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["roster", "date", "doctor", "kind", "fallback"])?;
    for sched in schedules {
        for e in &sched.entries {
            let date = e.date.format("%Y-%m-%d").to_string();
            w.write_record([
                sched.roster.as_str(),
                date.as_str(),
                e.doctor.as_str(),
                e.kind.as_str(),
                if e.fallback { "true" } else { "false" },
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des statistiques : header `roster,doctor,weekday,weekend,holiday,total`
pub fn export_stats_csv<P: AsRef<Path>>(path: P, set: &RosterSet) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["roster", "doctor", "weekday", "weekend", "holiday", "total"])?;
    let mut bufs = [
        itoa::Buffer::new(),
        itoa::Buffer::new(),
        itoa::Buffer::new(),
        itoa::Buffer::new(),
    ];
    for row in collect_stats(set) {
        let [a, b, c, d] = &mut bufs;
        w.write_record([
            row.roster.as_str(),
            row.doctor.as_str(),
            a.format(row.weekday),
            b.format(row.weekend),
            c.format(row.holiday),
            d.format(row.total),
        ])?;
    }
    w.flush()?;
    Ok(())
}

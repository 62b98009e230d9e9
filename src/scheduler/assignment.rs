use super::{types::SchedError, util};
use crate::model::{Day, Roster, ScheduleEntry};

/// Assigne un médecin par jour, dans l'ordre du calendrier.
///
/// Les compteurs de `roster` sont mis à jour jour après jour : chaque choix
/// tient compte des précédents, y compris ceux des appels antérieurs tant
/// qu'aucun reset n'a eu lieu.
pub fn assign(calendar: &[Day], roster: &mut Roster) -> Result<Vec<ScheduleEntry>, SchedError> {
    if roster.is_empty() {
        return Err(SchedError::InvalidRoster(roster.name.clone()));
    }

    let mut schedule = Vec::with_capacity(calendar.len());

    for day in calendar {
        let (candidates, fallback) = util::candidates(&roster.members, day);
        let Some(chosen) = util::pick(&roster.members, &candidates, day) else {
            return Err(SchedError::InvalidRoster(roster.name.clone()));
        };

        let member = &mut roster.members[chosen];
        member.record.record(day.kind, day.date);

        #[cfg(feature = "logging")]
        {
            if fallback {
                tracing::warn!(
                    roster = %roster.name,
                    date = %day.date,
                    doctor = %member.id,
                    "no rested doctor, rest constraint relaxed"
                );
            } else {
                tracing::debug!(
                    roster = %roster.name,
                    date = %day.date,
                    kind = %day.kind,
                    doctor = %member.id,
                    "shift assigned"
                );
            }
        }

        schedule.push(ScheduleEntry {
            date: day.date,
            doctor: member.id.clone(),
            kind: day.kind,
            fallback,
        });
    }

    Ok(schedule)
}

/// Remet à zéro tous les compteurs de la liste.
pub fn reset(roster: &mut Roster) {
    for member in roster.members.iter_mut() {
        member.record.clear();
    }

    #[cfg(feature = "logging")]
    tracing::info!(roster = %roster.name, "roster counters reset");
}

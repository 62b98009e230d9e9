use super::RestViolation;
use crate::model::ScheduleEntry;

/// Liste les gardes consécutives d'un même médecin dans un planning.
pub fn check_rest(entries: &[ScheduleEntry]) -> Vec<RestViolation> {
    let mut sorted: Vec<&ScheduleEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    sorted
        .windows(2)
        .filter_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let gap = (b.date - a.date).num_days();
            if a.doctor == b.doctor && gap <= 1 {
                Some(RestViolation {
                    doctor: a.doctor.clone(),
                    first: a.date,
                    second: b.date,
                })
            } else {
                None
            }
        })
        .collect()
}

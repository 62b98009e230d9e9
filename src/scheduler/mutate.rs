use super::{SchedError, Scheduler};
use crate::model::{DoctorId, Roster};

pub(super) fn add_roster<S: AsRef<str>>(
    scheduler: &mut Scheduler,
    name: &str,
    doctors: &[S],
) -> Result<(), SchedError> {
    if scheduler.rosters.find(name).is_some() {
        return Err(SchedError::DuplicateRoster(name.to_string()));
    }
    let roster = Roster::new(name, doctors)?;
    scheduler.rosters.rosters.push(roster);
    Ok(())
}

pub(super) fn add_doctor(
    scheduler: &mut Scheduler,
    roster: &str,
    doctor: DoctorId,
) -> Result<(), SchedError> {
    scheduler.rosters.get_mut(roster)?.add_doctor(doctor)
}

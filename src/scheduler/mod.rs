mod assignment;
mod conflicts;
mod mutate;
mod types;
mod util;

pub use assignment::{assign, reset};
pub use conflicts::check_rest;
pub use types::{RestViolation, SchedError};

use crate::model::{Day, DoctorId, RosterSchedule, RosterSet, ScheduleEntry};

/// Scheduler : encapsule l'ensemble des listes et leurs compteurs
#[derive(Debug, Default)]
pub struct Scheduler {
    rosters: RosterSet,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            rosters: RosterSet::default(),
        }
    }

    pub fn from_set(rosters: RosterSet) -> Self {
        Self { rosters }
    }

    pub fn rosters(&self) -> &RosterSet {
        &self.rosters
    }
    pub fn rosters_mut(&mut self) -> &mut RosterSet {
        &mut self.rosters
    }

    pub fn add_roster<S: AsRef<str>>(&mut self, name: &str, doctors: &[S]) -> Result<(), SchedError> {
        mutate::add_roster(self, name, doctors)
    }

    pub fn add_doctor(&mut self, roster: &str, doctor: DoctorId) -> Result<(), SchedError> {
        mutate::add_doctor(self, roster, doctor)
    }

    /// Planifie une seule liste.
    pub fn assign(
        &mut self,
        roster: &str,
        calendar: &[Day],
    ) -> Result<Vec<ScheduleEntry>, SchedError> {
        assignment::assign(calendar, self.rosters.get_mut(roster)?)
    }

    /// Planifie toutes les listes, indépendamment, sur le même calendrier.
    ///
    /// Échoue avant toute mutation si une des listes est vide.
    pub fn assign_all(&mut self, calendar: &[Day]) -> Result<Vec<RosterSchedule>, SchedError> {
        if let Some(empty) = self.rosters.rosters.iter().find(|r| r.is_empty()) {
            return Err(SchedError::InvalidRoster(empty.name.clone()));
        }
        self.rosters
            .rosters
            .iter_mut()
            .map(|roster| -> Result<RosterSchedule, SchedError> {
                let entries = assignment::assign(calendar, roster)?;
                Ok(RosterSchedule {
                    roster: roster.name.clone(),
                    entries,
                })
            })
            .collect()
    }

    pub fn reset(&mut self, roster: &str) -> Result<(), SchedError> {
        assignment::reset(self.rosters.get_mut(roster)?);
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for roster in self.rosters.rosters.iter_mut() {
            assignment::reset(roster);
        }
    }
}

use crate::scheduler::SchedError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifiant fort pour un médecin (unique au sein d'une liste)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoctorId(String);

impl DoctorId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type de journée, fourni par le classificateur de calendrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Weekday,
    Weekend,
    Holiday,
}

impl DayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DayKind::Weekday => "weekday",
            DayKind::Weekend => "weekend",
            DayKind::Holiday => "holiday",
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayKind {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekday" => Ok(DayKind::Weekday),
            "weekend" => Ok(DayKind::Weekend),
            "holiday" => Ok(DayKind::Holiday),
            _ => Err(SchedError::InvalidDay(s.to_string())),
        }
    }
}

/// Journée classée du calendrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub kind: DayKind,
}

impl Day {
    pub fn new(date: NaiveDate, kind: DayKind) -> Self {
        Self { date, kind }
    }
}

/// Compteurs d'équité d'un médecin, propres à une liste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    #[serde(default)]
    pub weekday: u32,
    #[serde(default)]
    pub weekend: u32,
    #[serde(default)]
    pub holiday: u32,
    /// `None` = jamais de garde depuis le dernier reset (toujours éligible).
    #[serde(default)]
    pub last_shift: Option<NaiveDate>,
}

impl DoctorRecord {
    pub fn count(&self, kind: DayKind) -> u32 {
        match kind {
            DayKind::Weekday => self.weekday,
            DayKind::Weekend => self.weekend,
            DayKind::Holiday => self.holiday,
        }
    }

    pub fn total(&self) -> u32 {
        self.weekday + self.weekend + self.holiday
    }

    /// Comptabilise une garde sur `date`.
    pub fn record(&mut self, kind: DayKind, date: NaiveDate) {
        match kind {
            DayKind::Weekday => self.weekday += 1,
            DayKind::Weekend => self.weekend += 1,
            DayKind::Holiday => self.holiday += 1,
        }
        self.last_shift = Some(date);
    }

    /// Vrai si le médecin n'a pas travaillé la veille ni le jour même.
    pub fn is_rested_for(&self, date: NaiveDate) -> bool {
        match self.last_shift {
            None => true,
            Some(last) => (date - last).num_days() > 1,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Médecin inscrit dans une liste, avec ses compteurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: DoctorId,
    #[serde(default)]
    pub record: DoctorRecord,
}

/// Liste de garde nommée ; l'ordre de `members` est l'ordre de déclaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Roster {
    /// Crée une liste en refusant les doublons.
    pub fn new<N, I, S>(name: N, doctors: I) -> Result<Self, SchedError>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self {
            name: name.into(),
            members: Vec::new(),
        };
        for d in doctors {
            roster.add_doctor(DoctorId::new(d))?;
        }
        Ok(roster)
    }

    pub fn add_doctor(&mut self, id: DoctorId) -> Result<(), SchedError> {
        if self.find(&id).is_some() {
            return Err(SchedError::DuplicateDoctor {
                roster: self.name.clone(),
                doctor: id.as_str().to_string(),
            });
        }
        self.members.push(Member {
            id,
            record: DoctorRecord::default(),
        });
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn doctors(&self) -> impl Iterator<Item = &DoctorId> {
        self.members.iter().map(|m| &m.id)
    }

    pub fn find(&self, id: &DoctorId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn record(&self, id: &DoctorId) -> Option<&DoctorRecord> {
        self.find(id).map(|m| &m.record)
    }
}

/// Entrée de planning produite par l'assignation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub doctor: DoctorId,
    pub kind: DayKind,
    /// Vrai si la contrainte de repos a dû être levée ce jour-là.
    #[serde(default)]
    pub fallback: bool,
}

/// Planning d'une liste pour un calendrier donné.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSchedule {
    pub roster: String,
    pub entries: Vec<ScheduleEntry>,
}

/// Ensemble des listes persistées (1re et 2e garde dans l'usage courant).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSet {
    #[serde(default)]
    pub rosters: Vec<Roster>,
}

impl RosterSet {
    pub fn find<'a>(&'a self, name: &str) -> Option<&'a Roster> {
        self.rosters.iter().find(|r| r.name == name)
    }
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Roster> {
        self.rosters.iter_mut().find(|r| r.name == name)
    }
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Roster, SchedError> {
        self.find_mut(name)
            .ok_or_else(|| SchedError::UnknownRoster(name.to_string()))
    }
}

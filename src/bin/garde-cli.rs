#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use garde::{
    calendar::{self, Holidays},
    io,
    model::{Day, DoctorId, RosterSchedule},
    report::{collect_stats, render_schedule, render_stats},
    scheduler::Scheduler,
    storage::{JsonStorage, Storage},
    DEFAULT_ROSTERS,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de répartition des gardes (état JSON local)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'état des listes
    #[arg(long, global = true, default_value = "garde.json")]
    state: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Créer les deux listes par défaut (1re et 2e garde)
    Init {
        /// Écrase un état existant
        #[arg(long)]
        force: bool,
    },

    /// Ajouter une liste
    AddRoster {
        #[arg(long)]
        name: String,
        /// liste "doc1,doc2,..." dans l'ordre de priorité
        #[arg(long)]
        doctors: String,
    },

    /// Importer des médecins depuis un CSV `roster,doctor`
    ImportDoctors {
        #[arg(long)]
        csv: String,
    },

    /// Générer les plannings (toutes les listes, ou une seule)
    Generate {
        /// Mois YYYY-MM
        #[arg(long, conflicts_with_all = ["start", "calendar"])]
        month: Option<String>,
        /// Début de période YYYY-MM-DD (avec --end)
        #[arg(long, requires = "end", conflicts_with = "calendar")]
        start: Option<String>,
        #[arg(long, requires = "start")]
        end: Option<String>,
        /// Calendrier déjà classé, CSV `date,kind`
        #[arg(long)]
        calendar: Option<String>,
        /// Jours fériés, CSV `date[,name]`
        #[arg(long, conflicts_with = "calendar")]
        holidays: Option<String>,
        /// Ne planifier que cette liste
        #[arg(long)]
        roster: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher et optionnellement exporter les statistiques
    Stats {
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Remettre les compteurs à zéro (nouvelle période)
    Reset {
        /// Une seule liste (toutes par défaut)
        #[arg(long)]
        name: Option<String>,
    },

    /// Lister les listes et médecins
    List {
        #[arg(long)]
        out_json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    {
        if cli.log {
            let _ = Subscriber::builder()
                .with_env_filter(EnvFilter::from_default_env())
                .try_init();
        }
    }

    let storage = JsonStorage::open(&cli.state)?;
    let mut scheduler = Scheduler::from_set(storage.load_or_default()?);

    let code = match cli.cmd {
        Commands::Init { force } => {
            if !scheduler.rosters().rosters.is_empty() && !force {
                bail!(
                    "{} already holds rosters (use --force to overwrite)",
                    storage.path().display()
                );
            }
            scheduler = Scheduler::new();
            for (name, doctors) in DEFAULT_ROSTERS {
                scheduler.add_roster(name, doctors)?;
            }
            storage.save(scheduler.rosters())?;
            0
        }
        Commands::AddRoster { name, doctors } => {
            let doctors: Vec<&str> = doctors
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            scheduler.add_roster(&name, doctors.as_slice())?;
            storage.save(scheduler.rosters())?;
            0
        }
        Commands::ImportDoctors { csv } => {
            for (roster, doctor) in io::import_doctors_csv(csv)? {
                if scheduler.rosters().find(&roster).is_none() {
                    scheduler.add_roster::<&str>(&roster, &[])?;
                }
                scheduler.add_doctor(&roster, DoctorId::new(doctor))?;
            }
            storage.save(scheduler.rosters())?;
            0
        }
        Commands::Generate {
            month,
            start,
            end,
            calendar: calendar_csv,
            holidays,
            roster,
            out_csv,
        } => {
            let holidays = match holidays {
                Some(path) => io::import_holidays_csv(path)?,
                None => Holidays::new(),
            };
            let days = build_calendar(month, start, end, calendar_csv, &holidays)?;

            let schedules = match roster {
                Some(name) => {
                    let entries = scheduler.assign(&name, &days)?;
                    vec![RosterSchedule {
                        roster: name,
                        entries,
                    }]
                }
                None => scheduler.assign_all(&days)?,
            };
            // export avant sauvegarde : un échec ne doit pas cumuler les compteurs
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedules)?;
            }
            storage.save(scheduler.rosters())?;

            let mut relaxed = 0usize;
            for sched in &schedules {
                println!("== {}", sched.roster);
                print!("{}", render_schedule(&sched.entries));
                relaxed += sched.entries.iter().filter(|e| e.fallback).count();
            }
            println!();
            print!("{}", render_stats(&collect_stats(scheduler.rosters())));

            if relaxed > 0 {
                eprintln!("Warning: {relaxed} day(s) without a rested doctor, rest constraint relaxed");
                // Code 2 = WARNING
                2
            } else {
                0
            }
        }
        Commands::Stats { out_csv } => {
            if let Some(path) = out_csv {
                io::export_stats_csv(path, scheduler.rosters())?;
            }
            print!("{}", render_stats(&collect_stats(scheduler.rosters())));
            0
        }
        Commands::Reset { name } => {
            match name {
                Some(name) => scheduler.reset(&name)?,
                None => scheduler.reset_all(),
            }
            storage.save(scheduler.rosters())?;
            println!("Counters reset for new period");
            0
        }
        Commands::List { out_json } => {
            if let Some(path) = out_json {
                io::export_state_json(path, scheduler.rosters())?;
            }
            for roster in &scheduler.rosters().rosters {
                let doctors: Vec<&str> = roster.doctors().map(|d| d.as_str()).collect();
                println!("{} | {}", roster.name, doctors.join(", "));
            }
            0
        }
    };

    std::process::exit(code);
}

fn build_calendar(
    month: Option<String>,
    start: Option<String>,
    end: Option<String>,
    calendar_csv: Option<String>,
    holidays: &Holidays,
) -> Result<Vec<Day>> {
    if let Some(path) = calendar_csv {
        return io::import_calendar_csv(path);
    }
    if let (Some(start), Some(end)) = (start, end) {
        let start = parse_day(&start)?;
        let end = parse_day(&end)?;
        return Ok(calendar::range_calendar(start, end, holidays)?);
    }
    let Some(month) = month else {
        bail!("one of --month, --start/--end or --calendar is required");
    };
    let (year, month) = calendar::parse_month(&month)?;
    Ok(calendar::month_calendar(year, month, holidays)?)
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

//! Flux d'entrée : effectif, saisie des noms, un passage du driver par
//! employé dans l'ordre d'intake, puis rendu final.

use crate::console::Console;
use crate::driver;
use crate::model::{Staff, MIN_EMPLOYEES_REQUIRED};
use crate::picker::ShiftPicker;
use crate::render::print_schedule;
use crate::schedule::WeeklySchedule;
use std::io;
use thiserror::Error;

/// Erreurs fatales du flux ; tout le reste est récupéré dans la boucle
/// interne du driver.
#[derive(Error, Debug)]
pub enum AppError {
    /// La ligne d'effectif n'est pas un entier décimal positif ou nul.
    #[error("invalid employee count: {0:?}")]
    InvalidCount(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Déroule une session complète sur la console fournie.
pub fn run<C: Console, P: ShiftPicker>(console: &mut C, picker: &mut P) -> Result<(), AppError> {
    console.write_prompt("How many employees do you want to schedule? ")?;
    let raw = console.read_line()?;
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidCount(raw.trim().to_owned()))?;

    if count < MIN_EMPLOYEES_REQUIRED {
        console.write_line("")?;
        console.write_line(&format!(
            "WARNING: For full 7-day coverage with 2 employees per shift, \
             you need at least {MIN_EMPLOYEES_REQUIRED} employees each working 5 days."
        ))?;
        console.write_line(&format!(
            "You only have {count} employees, so the schedule might be incomplete."
        ))?;
        console.write_line("")?;
    } else {
        console.write_line("")?;
        console.write_line(&format!(
            "Great! You have {count} employees, which should be enough \
             to cover 7 days (2 employees per shift)."
        ))?;
    }

    // Intake : tout nom rogné est accepté, y compris vide ou dupliqué.
    let mut staff = Staff::new();
    for i in 1..=count {
        console.write_prompt(&format!("Enter name for Employee #{i}: "))?;
        let name = console.read_line()?;
        staff.add(name.trim().to_owned());
    }

    let mut schedule = WeeklySchedule::new();
    for id in staff.ids() {
        driver::assign_week(console, picker, &mut schedule, &mut staff, id)?;
    }

    print_schedule(console, &schedule, &staff)?;
    Ok(())
}

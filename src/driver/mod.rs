//! Driver interactif : pour un employé, parcourt les sept jours et obtient
//! zéro ou une assignation par jour, sous plafond de charge.
//!
//! Machine à états par (employé, jour) : `need-input` → `done-day`.
//! Un choix explicite sur shift plein ré-invite (l'utilisateur peut
//! réessayer) ; « sans préférence » quand tout est plein avance (aucune
//! alternative n'existe).

mod choice;

pub use choice::{Choice, InvalidShiftToken};

use crate::console::Console;
use crate::model::{Day, EmployeeId, Shift, Staff, MAX_DAYS_PER_EMPLOYEE, MAX_SHIFT_CAPACITY};
use crate::picker::ShiftPicker;
use crate::schedule::WeeklySchedule;
use std::io;

/// Boucle externe : un passage sur les sept jours pour `id`.
///
/// Le plafond est contrôlé une fois par jour, avant l'invite ; une
/// assignation réussie consomme exactement un des cinq jours autorisés,
/// quel que soit le shift.
pub fn assign_week<C: Console, P: ShiftPicker>(
    console: &mut C,
    picker: &mut P,
    schedule: &mut WeeklySchedule,
    staff: &mut Staff,
    id: EmployeeId,
) -> io::Result<()> {
    let name = staff.get(id).name().to_owned();
    console.write_line("")?;
    console.write_line(&format!("=== Assigning shifts for {name} ==="))?;

    for day in Day::ALL {
        if staff.get(id).days_assigned() >= MAX_DAYS_PER_EMPLOYEE {
            console.write_line(&format!(
                "{name} has already worked {MAX_DAYS_PER_EMPLOYEE} days. Skipping remaining days."
            ))?;
            break;
        }

        console.write_line("")?;
        console.write_line(&format!(
            "{name}, pick a shift for {day} (MORNING/AFTERNOON/EVENING) or leave blank if no preference."
        ))?;
        console.write_line("If all shifts are full or you type 'skip', you won't work this day.")?;

        prompt_day(console, picker, schedule, staff, id, day)?;
    }
    Ok(())
}

/// Boucle interne : ré-invite jusqu'à atteindre `done-day`.
fn prompt_day<C: Console, P: ShiftPicker>(
    console: &mut C,
    picker: &mut P,
    schedule: &mut WeeklySchedule,
    staff: &mut Staff,
    id: EmployeeId,
    day: Day,
) -> io::Result<()> {
    loop {
        console.write_prompt("Your choice (or blank for no preference, 'skip' to skip day): ")?;
        let raw = console.read_line()?;

        match Choice::parse(&raw) {
            Err(InvalidShiftToken(_)) => {
                console
                    .write_line("Invalid shift. Type MORNING, AFTERNOON, EVENING, blank, or 'skip'.")?;
            }
            Ok(Choice::Skip) => {
                let name = staff.get(id).name();
                console.write_line(&format!("Skipping {day} for {name}"))?;
                return Ok(());
            }
            Ok(Choice::NoPreference) => {
                let available = schedule.available_shifts(day);
                if available.is_empty() {
                    console.write_line(&format!(
                        "All shifts are full on {day}. No assignment possible."
                    ))?;
                } else {
                    let chosen = available[picker.pick_uniform(available.len())];
                    commit(console, schedule, staff, id, day, chosen)?;
                }
                return Ok(());
            }
            Ok(Choice::Preferred(shift)) => {
                if schedule.count(day, shift) >= MAX_SHIFT_CAPACITY {
                    console.write_line("That shift is already full. Pick another or skip.")?;
                } else {
                    commit(console, schedule, staff, id, day, shift)?;
                    return Ok(());
                }
            }
        }
    }
}

/// Assignation : ajout au créneau + incrément du compteur + confirmation.
fn commit<C: Console>(
    console: &mut C,
    schedule: &mut WeeklySchedule,
    staff: &mut Staff,
    id: EmployeeId,
    day: Day,
    shift: Shift,
) -> io::Result<()> {
    schedule.assign(day, shift, id);
    staff.get_mut(id).increment_days_assigned();
    let name = staff.get(id).name();
    console.write_line(&format!("{name} assigned to {shift} on {day}"))
}

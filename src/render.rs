use crate::console::Console;
use crate::model::{Day, Shift, Staff};
use crate::schedule::WeeklySchedule;
use std::io;

/// Imprime le planning final : bannière, puis pour chaque jour l'en-tête
/// et les trois shifts avec les noms dans l'ordre d'insertion.
///
/// Le libellé `No one assigned` et l'espace final après chaque nom font
/// partie du contrat de sortie.
pub fn print_schedule<C: Console>(
    console: &mut C,
    schedule: &WeeklySchedule,
    staff: &Staff,
) -> io::Result<()> {
    console.write_line("")?;
    console.write_line("===== FINAL WEEKLY SCHEDULE =====")?;
    for day in Day::ALL {
        console.write_line("")?;
        console.write_line(&format!("--- {day} ---"))?;
        for shift in Shift::ALL {
            let assigned = schedule.assigned(day, shift);
            let mut line = format!("  {shift}: ");
            if assigned.is_empty() {
                line.push_str("No one assigned");
            } else {
                for &id in assigned {
                    line.push_str(staff.get(id).name());
                    line.push(' ');
                }
            }
            console.write_line(&line)?;
        }
    }
    Ok(())
}

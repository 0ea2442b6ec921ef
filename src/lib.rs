#![forbid(unsafe_code)]
//! Hebdo — construction interactive d'un planning hebdomadaire (sans BD).
//!
//! - 7 jours × 3 créneaux, au plus 2 personnes par créneau.
//! - Plafond de 5 jours travaillés par employé et par semaine.
//! - Saisie ligne à ligne : shift explicite, vide (tirage uniforme parmi
//!   les créneaux ouverts) ou `skip`.
//! - E/S et RNG consommés via des traits étroits ; testable sans terminal.

pub mod app;
pub mod console;
pub mod driver;
pub mod model;
pub mod picker;
pub mod render;
pub mod schedule;

pub use app::{run, AppError};
pub use console::{Console, StdConsole};
pub use driver::{assign_week, Choice, InvalidShiftToken};
pub use model::{
    Day, Employee, EmployeeId, Shift, Staff, MAX_DAYS_PER_EMPLOYEE, MAX_SHIFT_CAPACITY,
    MIN_EMPLOYEES_REQUIRED,
};
pub use picker::{RandomPicker, ShiftPicker};
pub use render::print_schedule;
pub use schedule::WeeklySchedule;

use crate::model::{Day, EmployeeId, Shift, MAX_SHIFT_CAPACITY};

/// Planning hebdomadaire : fonction totale (jour, shift) → créneau.
///
/// Tableaux de taille fixe indexés par ordinaux — pas de hachage,
/// ordre d'itération trivialement déterministe. Tous les créneaux
/// existent vides dès la construction, rien n'est créé paresseusement.
#[derive(Debug, Default)]
pub struct WeeklySchedule {
    slots: [[Vec<EmployeeId>; Shift::ALL.len()]; Day::ALL.len()],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupation courante du créneau (0..=2 quand les invariants tiennent).
    pub fn count(&self, day: Day, shift: Shift) -> usize {
        self.slots[day.index()][shift.index()].len()
    }

    /// Ajoute l'employé au créneau, sans contrôle de capacité ni de doublon.
    ///
    /// Précondition (à la charge de l'appelant) : `count(day, shift) < 2`
    /// et l'employé n'est encore sur aucun créneau de `day`.
    pub fn assign(&mut self, day: Day, shift: Shift, employee: EmployeeId) {
        self.slots[day.index()][shift.index()].push(employee);
    }

    /// Employés du créneau, dans l'ordre d'insertion.
    pub fn assigned(&self, day: Day, shift: Shift) -> &[EmployeeId] {
        &self.slots[day.index()][shift.index()]
    }

    /// Shifts encore ouverts ce jour-là, dans l'ordre matin → soir.
    pub fn available_shifts(&self, day: Day) -> Vec<Shift> {
        Shift::ALL
            .into_iter()
            .filter(|&s| self.count(day, s) < MAX_SHIFT_CAPACITY)
            .collect()
    }

    /// Vrai si l'employé figure sur au moins un créneau du jour.
    pub fn is_scheduled_on(&self, day: Day, employee: EmployeeId) -> bool {
        Shift::ALL
            .into_iter()
            .any(|s| self.assigned(day, s).contains(&employee))
    }
}

use std::fmt;

/// Au plus 2 personnes par créneau (jour, shift).
pub const MAX_SHIFT_CAPACITY: usize = 2;
/// Chaque employé travaille au plus 5 jours dans la semaine.
pub const MAX_DAYS_PER_EMPLOYEE: u32 = 5;
/// Effectif minimal pour garantir la couverture complète (7 j × 3 shifts × 2).
pub const MIN_EMPLOYEES_REQUIRED: usize = 12;

/// Jour de la semaine, ordre calendaire fixe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Itération déterministe lundi → dimanche.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Ordinal 0..=6, sert d'index de tableau.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
            Day::Saturday => "SATURDAY",
            Day::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Créneau intra-journée, ordre fixe matin → soir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Ordinal 0..=2, sert d'index de tableau.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "MORNING",
            Shift::Afternoon => "AFTERNOON",
            Shift::Evening => "EVENING",
        }
    }

    /// Reconnaît un identifiant de shift déjà replié en majuscules.
    pub fn from_token(token: &str) -> Option<Shift> {
        match token {
            "MORNING" => Some(Shift::Morning),
            "AFTERNOON" => Some(Shift::Afternoon),
            "EVENING" => Some(Shift::Evening),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifiant d'employé : index dans la liste `Staff`.
///
/// Les créneaux stockent des ids, jamais les employés eux-mêmes ;
/// la liste d'intake reste l'unique propriétaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(usize);

impl EmployeeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Employé : nom tel que saisi + compteur de jours assignés.
#[derive(Debug, Clone)]
pub struct Employee {
    name: String,
    days_assigned: u32,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            days_assigned: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days_assigned(&self) -> u32 {
        self.days_assigned
    }

    /// Seul mutateur du compteur ; aucune décrémentation n'existe.
    pub fn increment_days_assigned(&mut self) {
        self.days_assigned += 1;
    }
}

/// Liste d'employés dans l'ordre d'intake (append-only).
#[derive(Debug, Default)]
pub struct Staff {
    employees: Vec<Employee>,
}

impl Staff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepte n'importe quel nom, y compris vide ou dupliqué.
    pub fn add<N: Into<String>>(&mut self, name: N) -> EmployeeId {
        let id = EmployeeId(self.employees.len());
        self.employees.push(Employee::new(name));
        id
    }

    /// Les `EmployeeId` ne sont produits que par `add`, l'indexation est sûre.
    pub fn get(&self, id: EmployeeId) -> &Employee {
        &self.employees[id.0]
    }

    pub fn get_mut(&mut self, id: EmployeeId) -> &mut Employee {
        &mut self.employees[id.0]
    }

    /// Ids dans l'ordre d'intake.
    pub fn ids(&self) -> Vec<EmployeeId> {
        (0..self.employees.len()).map(EmployeeId).collect()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

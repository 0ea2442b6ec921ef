use rand::{rngs::StdRng, Rng, SeedableRng};

/// Tirage uniforme dans `0..len`, injectable pour des tests déterministes.
///
/// Consommé uniquement sur le chemin « sans préférence » ; aucune
/// pondération, aucune mémoire entre les appels.
pub trait ShiftPicker {
    /// Précondition : `len > 0`.
    fn pick_uniform(&mut self, len: usize) -> usize;
}

/// Picker réel sur `StdRng`, graine prise une seule fois au démarrage.
#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Graine fraîche depuis l'entropie de l'OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Graine fixe (rejeu, tests).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ShiftPicker for RandomPicker {
    fn pick_uniform(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

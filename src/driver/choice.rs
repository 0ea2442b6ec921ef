use crate::model::Shift;
use thiserror::Error;

/// Ligne de saisie qui n'est ni vide, ni `SKIP`, ni un identifiant de shift.
/// Récupérable : le driver ré-invite sur le même jour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid shift token: {0:?}")]
pub struct InvalidShiftToken(pub String);

/// Classification d'une ligne de saisie pour un (employé, jour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `SKIP` : passe au jour suivant sans assignation.
    Skip,
    /// Ligne vide : tirage uniforme parmi les shifts encore ouverts.
    NoPreference,
    /// Identifiant de shift explicite.
    Preferred(Shift),
}

impl Choice {
    /// Rogne les blancs, replie en majuscules, puis classe le jeton.
    pub fn parse(raw: &str) -> Result<Choice, InvalidShiftToken> {
        let token = raw.trim().to_uppercase();
        if token == "SKIP" {
            return Ok(Choice::Skip);
        }
        if token.is_empty() {
            return Ok(Choice::NoPreference);
        }
        Shift::from_token(&token)
            .map(Choice::Preferred)
            .ok_or(InvalidShiftToken(token))
    }
}

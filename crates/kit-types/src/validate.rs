use crate::error::KitError;

/// Outcome of the trigger/panel count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Consistent,
    Inconsistent { triggers: usize, panels: usize },
}

impl ValidationResult {
    pub fn is_consistent(&self) -> bool {
        matches!(self, ValidationResult::Consistent)
    }

    pub fn into_result(self) -> Result<(), KitError> {
        match self {
            ValidationResult::Consistent => Ok(()),
            ValidationResult::Inconsistent { triggers, panels } => {
                Err(KitError::structure_mismatch(triggers, panels))
            }
        }
    }
}

/// Consistent iff both sequences have the same length.
pub fn validate<T, P>(triggers: &[T], panels: &[P]) -> ValidationResult {
    if triggers.len() == panels.len() {
        ValidationResult::Consistent
    } else {
        ValidationResult::Inconsistent {
            triggers: triggers.len(),
            panels: panels.len(),
        }
    }
}

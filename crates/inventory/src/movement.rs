use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult, Entity, ItemId, MovementId};

/// Kind of stock movement.
///
/// Serialized with the upper-case labels the dashboard contract uses.
///
/// Note: a `Damage` movement does NOT flip the referenced item's `damaged`
/// flag - that flag is owned by the record store. Whether recording damage
/// should transition item status is a behavior to confirm against real
/// requirements; the movement log here is purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    In,
    Out,
    Damage,
    Return,
}

/// One entry in the append-only stock-movement log. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub item_id: ItemId,
    pub movement_type: MovementType,
    /// Moved quantity; always strictly positive, direction is carried by
    /// the movement type.
    pub quantity: i64,
    pub performed_by: String,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl Movement {
    pub fn new(
        item_id: ItemId,
        movement_type: MovementType,
        quantity: i64,
        performed_by: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MovementId::new(),
            item_id,
            movement_type,
            quantity,
            performed_by: performed_by.into(),
            notes: None,
            occurred_at,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity <= 0 {
            return Err(DomainError::invalid_value(format!(
                "movement quantity must be positive: {}",
                self.quantity
            )));
        }
        if self.performed_by.trim().is_empty() {
            return Err(DomainError::validation("performed_by cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Movement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_type_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&MovementType::Damage).unwrap(), "\"DAMAGE\"");
        assert_eq!(serde_json::to_string(&MovementType::Return).unwrap(), "\"RETURN\"");
    }

    #[test]
    fn validate_rejects_non_positive_quantity() {
        let m = Movement::new(ItemId::new(), MovementType::In, 0, "Admin", Utc::now());
        assert!(matches!(m.validate(), Err(DomainError::InvalidValue(_))));

        let m = Movement::new(ItemId::new(), MovementType::Out, -3, "Admin", Utc::now());
        assert!(matches!(m.validate(), Err(DomainError::InvalidValue(_))));
    }

    #[test]
    fn validate_rejects_blank_actor() {
        let m = Movement::new(ItemId::new(), MovementType::In, 5, "  ", Utc::now());
        assert!(matches!(m.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn notes_are_optional() {
        let m = Movement::new(ItemId::new(), MovementType::Return, 2, "Admin", Utc::now());
        assert_eq!(m.notes, None);
        let m = m.with_notes("customer return");
        assert_eq!(m.notes.as_deref(), Some("customer return"));
        assert!(m.validate().is_ok());
    }
}

//! Supplier entity.

use crate::SupplierId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supplier entity.
///
/// Suppliers carry no version token; their writes are last-write-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// Store-assigned identifier.
    pub id: SupplierId,

    /// Supplier name.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Optional contact email.
    pub contact_email: Option<String>,

    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Supplier {
    /// Applies a partial update: unsupplied fields keep their current values.
    pub fn apply_changes(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        contact_email: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(contact_email) = contact_email {
            self.contact_email = Some(contact_email);
        }
        self.updated_at = Utc::now();
    }
}

/// Fields for a supplier that has not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_supplier() -> Supplier {
        let now = Utc::now();
        Supplier {
            id: SupplierId::new(1),
            name: "Acme".to_string(),
            description: None,
            contact_email: Some("sales@acme.example".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_changes_partial() {
        let mut supplier = create_supplier();
        supplier.apply_changes(Some("Acme Corp".to_string()), None, None);

        assert_eq!(supplier.name, "Acme Corp");
        assert_eq!(
            supplier.contact_email,
            Some("sales@acme.example".to_string())
        );
    }

    #[test]
    fn test_apply_changes_sets_description() {
        let mut supplier = create_supplier();
        supplier.apply_changes(None, Some("wholesale".to_string()), None);
        assert_eq!(supplier.description, Some("wholesale".to_string()));
    }
}

//! Category entity.

use crate::CategoryId;
use serde::{Deserialize, Serialize};

/// Product category.
///
/// Deleting a category cascades to delete its products; the schema enforces
/// this with an `ON DELETE CASCADE` foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier.
    pub id: CategoryId,

    /// Category name.
    pub name: String,
}

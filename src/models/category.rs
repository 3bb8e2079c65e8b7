use serde::{Deserialize, Serialize};

/// A named grouping every recipe belongs to. Seeded by migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус записи справочника
///
/// В хранилище встречаются оба написания ("Active" и "active"),
/// поэтому при чтении принимаются оба.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityStatus {
    #[serde(alias = "active", alias = "ACTIVE")]
    Active,
    #[serde(alias = "inactive", alias = "INACTIVE")]
    Inactive,
}

impl EntityStatus {
    pub const ALL: [EntityStatus; 2] = [EntityStatus::Active, EntityStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Inactive => "Inactive",
        }
    }

    /// Разбор значения из формы/фильтра (регистр не важен, пустая строка даёт None)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EntityStatus::Active)
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(EntityStatus::parse("Active"), Some(EntityStatus::Active));
        assert_eq!(EntityStatus::parse(" inactive "), Some(EntityStatus::Inactive));
        assert_eq!(EntityStatus::parse(""), None);
        assert_eq!(EntityStatus::parse("archived"), None);
    }

    #[test]
    fn test_deserialize_accepts_lowercase() {
        let s: EntityStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(s, EntityStatus::Active);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"Active\"");
    }
}

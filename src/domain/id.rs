use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::error::DragboardError;

macro_rules! board_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = DragboardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| DragboardError::InvalidId(s.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

board_id! {
    /// Unique identifier for a board column
    ColumnId
}

board_id! {
    /// Unique identifier for a task card
    TaskId
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<TaskId> = (0..500).map(|_| TaskId::new()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_id_parsing() {
        let id = ColumnId::new();
        let parsed = ColumnId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        let upper = id.to_string().to_uppercase();
        assert_eq!(ColumnId::from_str(&upper).unwrap(), id);

        assert!(ColumnId::from_str("not-an-id").is_err());
        assert!(TaskId::from_str("").is_err());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = TaskId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}

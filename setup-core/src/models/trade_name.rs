use serde::{Deserialize, Serialize};

use crate::DocumentRef;

/// Either an already reserved trade name, backed by its reservation
/// document, or a list of candidate names to reserve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeName {
    Reserved { document: DocumentRef },
    Suggested { names: Vec<String> },
}

impl TradeName {
    pub fn has_reserved_name(&self) -> bool {
        matches!(self, Self::Reserved { .. })
    }
}

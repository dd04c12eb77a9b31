use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCategory {
    pub id: u32,
    pub name: String,
    pub description: String,
}

const CATALOGUE: &[(u32, &str, &str)] = &[
    (1, "Technology", "Software, Hardware, IT Services"),
    (2, "Manufacturing", "Production and Manufacturing"),
    (3, "Retail", "Consumer Goods and Services"),
    (4, "Healthcare", "Medical and Health Services"),
    (5, "Finance", "Banking and Financial Services"),
];

impl BusinessCategory {
    fn from_entry(&(id, name, description): &(u32, &str, &str)) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Every category a company can be registered under, in display order.
    pub fn catalogue() -> Vec<BusinessCategory> {
        CATALOGUE.iter().map(Self::from_entry).collect()
    }

    pub fn find(id: u32) -> Option<Self> {
        CATALOGUE
            .iter()
            .find(|(entry_id, _, _)| *entry_id == id)
            .map(Self::from_entry)
    }

    /// Case-insensitive lookup by name, ignoring surrounding whitespace.
    pub fn find_by_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        CATALOGUE
            .iter()
            .find(|(_, entry_name, _)| entry_name.eq_ignore_ascii_case(wanted))
            .map(Self::from_entry)
    }

    /// Accepts either a numeric id (`"1"`) or a name (`"technology"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().parse::<u32>() {
            Ok(id) => Self::find(id),
            Err(_) => Self::find_by_name(s),
        }
    }
}

use serde::{Deserialize, Serialize};

/// A licensable business activity. Each activity belongs to exactly one
/// business category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub code: String,
    pub isic4_code: Option<String>,
    pub description: String,
    pub description_arabic: String,
}

// (category id, code, English description, Arabic description)
const ACTIVITIES: &[(u32, &str, &str, &str)] = &[
    (1, "A1", "Software Development", "تطوير البرمجيات"),
    (1, "A2", "IT Consulting", "استشارات تكنولوجيا المعلومات"),
    (1, "A3", "Cloud Services", "خدمات السحابة"),
    (2, "B1", "Manufacturing Electronics", "تصنيع الإلكترونيات"),
    (2, "B2", "Textile Production", "إنتاج المنسوجات"),
    (2, "B3", "Automobile Assembly", "تجميع السيارات"),
    (3, "C1", "Retail Store", "متجر بيع بالتجزئة"),
    (3, "C2", "E-commerce", "التجارة الإلكترونية"),
    (3, "C3", "Franchise Operations", "عمليات الامتياز"),
    (4, "D1", "Clinic", "عيادة"),
    (4, "D2", "Pharmacy", "صيدلية"),
    (4, "D3", "Medical Equipment Supply", "توريد المعدات الطبية"),
    (5, "E1", "Banking", "الخدمات المصرفية"),
    (5, "E2", "Insurance", "تأمين"),
    (5, "E3", "Investment Advisory", "استشارات الاستثمار"),
];

impl Activity {
    /// Activities offered for a category, in catalogue order. Unknown
    /// categories have no activities.
    pub fn for_category(category_id: u32) -> Vec<Activity> {
        ACTIVITIES
            .iter()
            .filter(|(category, ..)| *category == category_id)
            .map(|&(_, code, description, description_arabic)| Activity {
                code: code.to_string(),
                isic4_code: None,
                description: description.to_string(),
                description_arabic: description_arabic.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn technology_has_three_activities() {
        let codes: Vec<String> = Activity::for_category(1)
            .into_iter()
            .map(|a| a.code)
            .collect();

        assert_eq!(codes, vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn unknown_category_has_no_activities() {
        assert!(Activity::for_category(99).is_empty());
    }
}

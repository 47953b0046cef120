//! Document categories shared by the summarizer and the document list filters.

use serde::{Deserialize, Serialize};

/// Label of the "show everything" filter chip.
pub const ALL_FILTER_LABEL: &str = "Tous";

/// Category stored on a document when no summary could be produced.
pub const UNCLASSIFIED_LABEL: &str = "Non classé";

/// Contract category, declared in classification priority order.
///
/// Serialized as the French label stored in the `category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Assurance")]
    Insurance,
    #[serde(rename = "Télécom & Internet")]
    Telecom,
    #[serde(rename = "Énergie & Services")]
    Energy,
    #[serde(rename = "Banque & Finance")]
    Banking,
    #[serde(rename = "Location & Immobilier")]
    Housing,
    #[serde(rename = "Abonnements")]
    Subscriptions,
    #[serde(rename = "Travail & Freelance")]
    Work,
    #[serde(rename = "Éducation & Formation")]
    Education,
    #[serde(rename = "Santé & Bien-être")]
    Health,
    #[serde(rename = "Autres")]
    Other,
}

impl Category {
    /// Every category in priority order. `Other` is always last.
    pub const ALL: [Category; 10] = [
        Category::Insurance,
        Category::Telecom,
        Category::Energy,
        Category::Banking,
        Category::Housing,
        Category::Subscriptions,
        Category::Work,
        Category::Education,
        Category::Health,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Insurance => "Assurance",
            Category::Telecom => "Télécom & Internet",
            Category::Energy => "Énergie & Services",
            Category::Banking => "Banque & Finance",
            Category::Housing => "Location & Immobilier",
            Category::Subscriptions => "Abonnements",
            Category::Work => "Travail & Freelance",
            Category::Education => "Éducation & Formation",
            Category::Health => "Santé & Bien-être",
            Category::Other => "Autres",
        }
    }

    /// Lower-case keywords that select this category. Matched as substrings.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Insurance => &["assurance", "mutuelle", "sinistre"],
            Category::Telecom => &["télécom", "mobile", "forfait", "internet", "fibre"],
            Category::Energy => &["électricité", "edf", "gaz", "énergie", "engie"],
            Category::Banking => &["banque", "compte", "crédit", "carte", "prêt"],
            Category::Housing => &["bail", "location", "immobilier", "syndic"],
            Category::Subscriptions => &["abonnement", "netflix", "spotify", "prime"],
            Category::Work => &["contrat de travail", "mission", "prestation"],
            Category::Education => &["école", "formation", "certificat", "cours"],
            Category::Health => &["santé", "médecin", "sport", "bien-être"],
            Category::Other => &[],
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter chips for the document list: "Tous" then every category label.
pub fn filter_chips() -> Vec<&'static str> {
    std::iter::once(ALL_FILTER_LABEL)
        .chain(Category::ALL.iter().map(|c| c.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_last_and_keywordless() {
        assert_eq!(Category::ALL.last(), Some(&Category::Other));
        assert!(Category::Other.keywords().is_empty());
        for c in &Category::ALL[..9] {
            assert!(!c.keywords().is_empty(), "{c} has no keywords");
        }
    }

    #[test]
    fn test_label_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(Category::from_label("Banque"), None);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Category::Energy).unwrap();
        assert_eq!(json, "\"Énergie & Services\"");
        let back: Category = serde_json::from_str("\"Santé & Bien-être\"").unwrap();
        assert_eq!(back, Category::Health);
    }

    #[test]
    fn test_filter_chips() {
        let chips = filter_chips();
        assert_eq!(chips.len(), 11);
        assert_eq!(chips[0], "Tous");
        assert_eq!(chips[1], "Assurance");
        assert_eq!(chips[10], "Autres");
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for c in Category::ALL {
            for kw in c.keywords() {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }
}

//! Keyword-based contract categorization.

use dossier_core::Category;

/// Classify text by the first category, in priority order, with a keyword
/// occurring anywhere in the lower-cased text. Falls back to `Other`.
pub fn classify(text: &str) -> Category {
    let text_lower = text.to_lowercase();

    Category::ALL
        .iter()
        .copied()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|kw| text_lower.contains(kw))
        })
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_insurance() {
        assert_eq!(
            classify("Votre MUTUELLE santé couvre les frais"),
            Category::Insurance
        );
    }

    #[test]
    fn test_priority_beats_frequency() {
        // One insurance keyword against three banking ones.
        let text = "Banque Populaire : compte courant, carte bleue et assurance emprunteur";
        assert_eq!(classify(text), Category::Insurance);
    }

    #[test]
    fn test_accented_keywords_after_lowercasing() {
        assert_eq!(classify("Facture ÉLECTRICITÉ du mois"), Category::Energy);
        assert_eq!(classify("Inscription à l'École de musique"), Category::Education);
    }

    #[test]
    fn test_substring_matching() {
        // "automobile" contains "mobile".
        assert_eq!(classify("Entretien automobile annuel"), Category::Telecom);
        assert_eq!(classify("Un contrat de travail à durée indéterminée"), Category::Work);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("lorem ipsum dolor sit amet"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }
}

//! Date and amount extraction using regex patterns.
//!
//! Matches are returned verbatim: no normalization and no calendar check.

use once_cell::sync::Lazy;
use regex::Regex;

// Day and month of one or two digits, four-digit year, `/` or `-` separators.
// ASCII word boundaries keep the date from being cut out of a longer digit run.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{4}(?-u:\b)").unwrap()
});

// Number with an optional `,` or `.` decimal part, one optional space, then
// `€`, `euro` or `euros` in any case.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[0-9]+[,.]?[0-9]*\s?(?:€|euros?)").unwrap());

/// First `D/M/YYYY` or `D-M-YYYY` token in the text.
pub fn find_date(text: &str) -> Option<&str> {
    DATE_RE.find(text).map(|m| m.as_str())
}

/// First amount followed by a euro currency token, currency included.
pub fn find_amount(text: &str) -> Option<&str> {
    AMOUNT_RE.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_date() {
        assert_eq!(find_date("Signé le 12/05/2023 à Paris"), Some("12/05/2023"));
        assert_eq!(find_date("Échéance : 1-2-2024."), Some("1-2-2024"));
        assert_eq!(
            find_date("du 03/01/2022 au 02/01/2023"),
            Some("03/01/2022")
        );
    }

    #[test]
    fn test_date_is_syntactic_only() {
        assert_eq!(find_date("valable au 32/13/2024"), Some("32/13/2024"));
        assert_eq!(find_date("code 99/99/9999"), Some("99/99/9999"));
    }

    #[test]
    fn test_date_must_stand_alone() {
        assert_eq!(find_date("réf 123/05/2023"), None);
        assert_eq!(find_date("réf 12/05/20231"), None);
        assert_eq!(find_date("ref A12/05/2023"), None);
        assert_eq!(find_date("12/05/23"), None);
        assert_eq!(find_date("12.05.2023"), None);
    }

    #[test]
    fn test_mixed_separators_accepted() {
        assert_eq!(find_date("le 12/05-2023"), Some("12/05-2023"));
    }

    #[test]
    fn test_find_amount() {
        assert_eq!(find_amount("montant de 12,50 € TTC"), Some("12,50 €"));
        assert_eq!(find_amount("soit 12.50 euros par mois"), Some("12.50 euros"));
        assert_eq!(find_amount("prix 30€"), Some("30€"));
        assert_eq!(find_amount("total 1500 Euro"), Some("1500 Euro"));
        assert_eq!(find_amount("TOTAL 99 EUROS"), Some("99 EUROS"));
    }

    #[test]
    fn test_amount_requires_digits() {
        assert_eq!(find_amount("payable en € uniquement"), None);
        assert_eq!(find_amount("12 dollars"), None);
    }

    #[test]
    fn test_amount_takes_first_match() {
        assert_eq!(
            find_amount("45,90 € puis 50,00 € après un an"),
            Some("45,90 €")
        );
    }

    #[test]
    fn test_amount_with_non_breaking_space() {
        assert_eq!(find_amount("45,90\u{a0}€"), Some("45,90\u{a0}€"));
    }
}

//! Nigerian administrative regions and their two-digit DAN state codes.
//!
//! The table is immutable and shared by the whole process. Names resolve
//! case-insensitively; the two-letter postal abbreviations are accepted as
//! aliases for the canonical names.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// A state (or the Federal Capital Territory) with its DAN code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Canonical display name, e.g. "Lagos".
    pub name: &'static str,
    /// Two-letter postal abbreviation, e.g. "LA".
    pub abbreviation: &'static str,
    /// Two-digit zero-padded code, e.g. "24".
    pub code: &'static str,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

const fn state(name: &'static str, abbreviation: &'static str, code: &'static str) -> State {
    State {
        name,
        abbreviation,
        code,
    }
}

/// All regions in code order.
pub static STATES: [State; 37] = [
    state("Abia", "AB", "01"),
    state("Adamawa", "AD", "02"),
    state("Akwa Ibom", "AK", "03"),
    state("Anambra", "AN", "04"),
    state("Bauchi", "BA", "05"),
    state("Bayelsa", "BY", "06"),
    state("Benue", "BE", "07"),
    state("Borno", "BO", "08"),
    state("Cross River", "CR", "09"),
    state("Delta", "DE", "10"),
    state("Ebonyi", "EB", "11"),
    state("Edo", "ED", "12"),
    state("Ekiti", "EK", "13"),
    state("Enugu", "EN", "14"),
    state("Gombe", "GO", "15"),
    state("Imo", "IM", "16"),
    state("Jigawa", "JI", "17"),
    state("Kaduna", "KD", "18"),
    state("Kano", "KN", "19"),
    state("Katsina", "KT", "20"),
    state("Kebbi", "KE", "21"),
    state("Kogi", "KO", "22"),
    state("Kwara", "KW", "23"),
    state("Lagos", "LA", "24"),
    state("Nasarawa", "NA", "25"),
    state("Niger", "NI", "26"),
    state("Ogun", "OG", "27"),
    state("Ondo", "ON", "28"),
    state("Osun", "OS", "29"),
    state("Oyo", "OY", "30"),
    state("Plateau", "PL", "31"),
    state("Rivers", "RI", "32"),
    state("Sokoto", "SO", "33"),
    state("Taraba", "TA", "34"),
    state("Yobe", "YO", "35"),
    state("Zamfara", "ZA", "36"),
    state("FCT - Abuja", "FC", "37"),
];

/// Lowercased name or abbreviation -> index into [`STATES`].
fn name_index() -> &'static HashMap<String, usize> {
    static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::with_capacity(STATES.len() * 2);
        for (i, s) in STATES.iter().enumerate() {
            index.insert(s.name.to_lowercase(), i);
            index.insert(s.abbreviation.to_lowercase(), i);
        }
        index
    })
}

/// Resolves a state by name or abbreviation, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Option<&'static State> {
    name_index()
        .get(&name.trim().to_lowercase())
        .map(|&i| &STATES[i])
}

/// Resolves a state by its two-digit code.
pub fn by_code(code: &str) -> Option<&'static State> {
    STATES.iter().find(|s| s.code == code)
}

/// Convenience: the code for a state name, if known.
pub fn code_for(name: &str) -> Option<&'static str> {
    by_name(name).map(|s| s.code)
}

/// Convenience: the canonical name for a code, if known.
pub fn name_for(code: &str) -> Option<&'static str> {
    by_code(code).map(|s| s.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique_and_two_digits() {
        let mut seen = HashSet::new();
        for s in STATES.iter() {
            assert_eq!(s.code.len(), 2, "{} has malformed code", s.name);
            assert!(s.code.chars().all(|c| c.is_ascii_digit()));
            assert!(seen.insert(s.code), "Duplicate code {}", s.code);
        }
        assert_eq!(seen.len(), 37);
    }

    #[test]
    fn test_abbreviations_are_unique() {
        let abbreviations: HashSet<_> = STATES.iter().map(|s| s.abbreviation).collect();
        assert_eq!(abbreviations.len(), STATES.len());
    }

    #[test]
    fn test_lookup_by_name_is_case_insensitive() {
        assert_eq!(code_for("Lagos"), Some("24"));
        assert_eq!(code_for("LAGOS"), Some("24"));
        assert_eq!(code_for("  lagos "), Some("24"));
        assert_eq!(code_for("akwa ibom"), Some("03"));
        assert_eq!(code_for("FCT - Abuja"), Some("37"));
    }

    #[test]
    fn test_abbreviation_aliases() {
        assert_eq!(code_for("LA"), Some("24"));
        assert_eq!(code_for("fc"), Some("37"));
        assert_eq!(by_name("KN").map(|s| s.name), Some("Kano"));
    }

    #[test]
    fn test_unknown_name() {
        assert!(by_name("Atlantis").is_none());
        assert!(by_name("").is_none());
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(name_for("24"), Some("Lagos"));
        assert_eq!(name_for("01"), Some("Abia"));
        assert_eq!(name_for("99"), None);
        assert_eq!(name_for("00"), None);
    }

    #[test]
    fn test_round_trip_every_state() {
        for s in STATES.iter() {
            let by_code = by_code(s.code).unwrap();
            assert_eq!(by_name(by_code.name), Some(s));
        }
    }
}

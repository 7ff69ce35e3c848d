//! State name to postal code mapping
//!
//! A missing entry is not an error: callers get `None` and the row's code
//! stays empty downstream.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Full state name and two-letter postal code, 50 states plus DC
const STATE_CODES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

static GLOBAL: LazyLock<StateCodeMap> =
    LazyLock::new(|| StateCodeMap::from_pairs(STATE_CODES.iter().copied()));

/// Lookup from full state name to postal code
#[derive(Debug, Clone)]
pub struct StateCodeMap {
    codes: HashMap<String, String>,
}

impl StateCodeMap {
    /// The built-in U.S. mapping
    pub fn global() -> &'static StateCodeMap {
        &GLOBAL
    }

    /// Build a custom mapping (fixtures, non-U.S. data)
    pub fn from_pairs<N, C>(pairs: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            codes: pairs
                .into_iter()
                .map(|(name, code)| (name.into(), code.into()))
                .collect(),
        }
    }

    /// Postal code for a full state name, exact match
    pub fn code(&self, state: &str) -> Option<&str> {
        self.codes.get(state).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_covers_states_and_dc() {
        let map = StateCodeMap::global();

        assert_eq!(map.len(), 51);
        assert_eq!(map.code("Texas"), Some("TX"));
        assert_eq!(map.code("District of Columbia"), Some("DC"));
        assert_eq!(map.code("West Virginia"), Some("WV"));
    }

    #[test]
    fn test_codes_are_two_letters() {
        for (_, code) in STATE_CODES {
            assert_eq!(code.len(), 2);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        let map = StateCodeMap::global();

        assert_eq!(map.code("Ruritania"), None);
        assert_eq!(map.code("texas"), None);
    }
}

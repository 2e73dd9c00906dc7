use serde::{Deserialize, Serialize};

/// League a team plays in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum League {
    NA,
    AL,
    #[default]
    Unknown,
}

impl League {
    /// Parse a league code
    ///
    /// Parsing never fails: anything other than an exact `NA` or `AL`
    /// yields [`League::Unknown`].
    pub fn parse(code: &str) -> Self {
        match code {
            "NA" => League::NA,
            "AL" => League::AL,
            _ => League::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            League::NA => "NA",
            League::AL => "AL",
            League::Unknown => "Unknown",
        }
    }
}

impl From<&str> for League {
    fn from(code: &str) -> Self {
        League::parse(code)
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team, identified by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub league: League,
}

impl Team {
    pub fn new(name: impl Into<String>, league: League) -> Self {
        Self {
            name: name.into(),
            league,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_parse_known_codes() {
        assert_eq!(League::parse("NA"), League::NA);
        assert_eq!(League::parse("AL"), League::AL);
    }

    #[test]
    fn test_league_parse_defaults_to_unknown() {
        assert_eq!(League::parse("NL"), League::Unknown);
        assert_eq!(League::parse("al"), League::Unknown);
        assert_eq!(League::parse(""), League::Unknown);
        assert_eq!(League::from("Federal"), League::Unknown);
    }

    #[test]
    fn test_league_display_round_trips_through_parse() {
        for league in [League::NA, League::AL] {
            assert_eq!(League::parse(&league.to_string()), league);
        }
    }
}

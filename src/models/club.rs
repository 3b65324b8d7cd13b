use serde::{Deserialize, Serialize};

/// A physical club location. Static reference data, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    pub name: String,
}

impl Club {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Resolve a club id against a club list, with a display fallback.
pub fn club_name<'a>(clubs: &'a [Club], club_id: &str) -> &'a str {
    clubs
        .iter()
        .find(|c| c.id == club_id)
        .map(|c| c.name.as_str())
        .unwrap_or("Unknown Club")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_name_lookup() {
        let clubs = vec![Club::new("club-001", "Downtown Fitness Center")];
        assert_eq!(club_name(&clubs, "club-001"), "Downtown Fitness Center");
        assert_eq!(club_name(&clubs, "club-999"), "Unknown Club");
    }
}

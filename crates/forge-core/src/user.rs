use serde::{Deserialize, Serialize};

/// Profile of an authenticated user, as resolved from the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: Option<String>,
}

impl User {
    #[must_use]
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        full.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_both_parts() {
        let user = User {
            id: "u1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            image: None,
        };
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn full_name_trims_when_a_part_is_empty() {
        let user = User {
            id: "u2".into(),
            first_name: "Prince".into(),
            last_name: String::new(),
            email: "p@example.com".into(),
            image: None,
        };
        assert_eq!(user.full_name(), "Prince");
    }
}

use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};

/// Display name of a profile, workout or custom exercise.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > Self::MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Turn generated text into a name, shortening it if needed.
    pub(crate) fn generated(name: &str) -> Self {
        let truncated = name.trim().chars().take(Self::MAX_LEN).collect::<String>();
        Self::new(&truncated).unwrap_or_else(|_| Name("Workout".to_string()))
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Mia", Ok(Name("Mia".to_string())))]
    #[case("  Coach Sam  ", Ok(Name("Coach Sam".to_string())))]
    #[case("\t", Err(NameError::Empty))]
    #[case(&"Ü".repeat(64), Ok(Name("Ü".repeat(64))))]
    #[case(&"x".repeat(65), Err(NameError::TooLong(65)))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_generated() {
        assert_eq!(Name::generated(&"y".repeat(80)), Name("y".repeat(64)));
        assert_eq!(Name::generated(" "), Name("Workout".to_string()));
    }

    #[test]
    fn test_name_deserialize() {
        assert_eq!(
            serde_json::from_str::<Name>("\" Leg Day \"").unwrap(),
            Name("Leg Day".to_string())
        );
        assert!(serde_json::from_str::<Name>("\"\"").is_err());
        assert_eq!(
            serde_json::to_string(&Name("Leg Day".to_string())).unwrap(),
            "\"Leg Day\""
        );
    }
}

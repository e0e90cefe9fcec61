use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;
use uuid::Uuid;

use crate::{CreateError, DeleteError, Name, ReadError, UpdateError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait ProfileService {
    async fn get_profiles(&self) -> Result<Vec<Profile>, ReadError>;
    async fn create_profile(&self, name: Name, kind: ProfileType) -> Result<Profile, CreateError>;
    async fn replace_profile(&self, profile: Profile) -> Result<Profile, UpdateError>;
    async fn delete_profile(&self, id: ProfileID) -> Result<ProfileID, DeleteError>;

    async fn validate_profile_name(
        &self,
        name: &str,
        id: ProfileID,
    ) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_profiles().await {
                Ok(profiles) => {
                    if profiles.iter().all(|p| p.id == id || p.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn read_profiles(&self) -> Result<Vec<Profile>, ReadError>;
    async fn create_profile(&self, name: Name, kind: ProfileType) -> Result<Profile, CreateError>;
    async fn replace_profile(&self, profile: Profile) -> Result<Profile, UpdateError>;
    async fn delete_profile(&self, id: ProfileID) -> Result<ProfileID, DeleteError>;
}

/// A household member using the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileID,
    pub name: Name,
    pub kind: ProfileType,
}

#[derive(
    Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProfileID(Uuid);

impl ProfileID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ProfileID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProfileID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum ProfileType {
    Adult,
    Teen,
    /// Young child, trains with playful activities instead of exercises.
    Child,
    /// Group fitness instructor who also logs taught classes.
    Instructor,
}

impl ProfileType {
    #[must_use]
    pub fn is_child(self) -> bool {
        self == ProfileType::Child
    }
}

impl From<&str> for ProfileType {
    fn from(value: &str) -> Self {
        match value {
            "teen" => ProfileType::Teen,
            "child" => ProfileType::Child,
            "instructor" => ProfileType::Instructor,
            _ => ProfileType::Adult,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProfileType::Adult => "adult",
                ProfileType::Teen => "teen",
                ProfileType::Child => "child",
                ProfileType::Instructor => "instructor",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_profile_id_nil() {
        assert!(ProfileID::nil().is_nil());
        assert_eq!(ProfileID::nil(), ProfileID::default());
    }

    #[rstest]
    #[case("adult", ProfileType::Adult)]
    #[case("teen", ProfileType::Teen)]
    #[case("child", ProfileType::Child)]
    #[case("instructor", ProfileType::Instructor)]
    #[case("unknown", ProfileType::Adult)]
    fn test_profile_type_from_str(#[case] value: &str, #[case] expected: ProfileType) {
        assert_eq!(ProfileType::from(value), expected);
    }

    #[test]
    fn test_profile_type_display_round_trip() {
        for kind in ProfileType::iter() {
            assert_eq!(ProfileType::from(kind.to_string().as_str()), kind);
        }
    }

    #[test]
    fn test_profile_type_is_child() {
        assert_eq!(
            ProfileType::iter()
                .filter(|k| k.is_child())
                .collect::<Vec<_>>(),
            vec![ProfileType::Child]
        );
    }
}

//! Unique-key newtypes for the three collections.
//!
//! Flavors, rooms and users are all keyed by a free-form name. The only
//! invariant enforced here is that a name is not blank; everything else is
//! left to the store.

use std::fmt;

/// Validation errors returned by the name constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameValidationError {
    #[error("{kind} name must not be empty")]
    Empty { kind: &'static str },
}

macro_rules! define_name {
    (
        $(#[$outer:meta])*
        $name:ident => $kind:literal
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the name from owned input.
            pub fn new(value: impl Into<String>) -> Result<Self, NameValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(NameValidationError::Empty { kind: $kind });
                }
                Ok(Self(value))
            }

            /// Borrow the name as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = NameValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_name! {
    /// Unique key of a catalogue flavor.
    FlavorName => "flavor"
}

define_name! {
    /// Unique key of a chat room.
    RoomName => "room"
}

define_name! {
    /// Unique key of a chat participant.
    UserName => "user"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_names_are_rejected(#[case] raw: &str) {
        assert_eq!(
            RoomName::new(raw),
            Err(NameValidationError::Empty { kind: "room" })
        );
    }

    #[rstest]
    fn names_keep_surrounding_whitespace() {
        let name = UserName::new(" alice ").expect("valid name");
        assert_eq!(name.as_ref(), " alice ");
    }

    #[rstest]
    fn error_message_names_the_collection() {
        let err = FlavorName::new("").expect_err("blank name");
        assert_eq!(err.to_string(), "flavor name must not be empty");
    }

    #[rstest]
    fn deserialisation_applies_validation() {
        let result: Result<UserName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
        let name: UserName = serde_json::from_str("\"alice\"").expect("valid name");
        assert_eq!(name.to_string(), "alice");
    }

    #[rstest]
    fn names_order_lexicographically() {
        let mut names = vec![
            RoomName::new("lobby").expect("valid"),
            RoomName::new("attic").expect("valid"),
        ];
        names.sort();
        assert_eq!(names[0].as_ref(), "attic");
    }
}

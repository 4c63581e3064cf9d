//! UUID-backed entity identifiers.
//!
//! Users, recipes and ingredients are all keyed by a v4 UUID. The
//! [`uuid_identifier!`] macro stamps out the newtype, its parsing rules and its
//! serde representation (a hyphenated string) once for every entity.

use thiserror::Error;

/// Raised when a raw string is not a valid identifier for `entity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} id must be a valid UUID")]
pub struct IdentifierError {
    /// Entity name used in the message, for example `"recipe"`.
    pub entity: &'static str,
}

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Parse an identifier, rejecting empty, padded or malformed input.
            pub fn new(
                id: impl AsRef<str>,
            ) -> Result<Self, $crate::domain::identifier::IdentifierError> {
                let raw = id.as_ref();
                if raw.is_empty() || raw.trim() != raw {
                    return Err($crate::domain::identifier::IdentifierError { entity: $entity });
                }
                ::uuid::Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| $crate::domain::identifier::IdentifierError { entity: $entity })
            }

            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID, typically read back from storage.
            pub const fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            pub const fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::identifier::IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::identifier::IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

pub(crate) use uuid_identifier;

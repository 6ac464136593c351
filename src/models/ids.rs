//! Identifier newtypes.
//!
//! The feed API is not consistent about id types (some deployments send
//! integers, some strings), so every id deserializes from either and is
//! kept as a string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Helper to deserialize id as either string or integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_id(deserializer).map(Self)
            }
        }
    };
}

id_type!(
    /// Identifier of a feed post.
    PostId
);
id_type!(
    /// Identifier of a user (post author, friend, current user).
    UserId
);
id_type!(
    /// Identifier of a comment.
    CommentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_and_integer() {
        let from_str: PostId = serde_json::from_str("\"p-1\"").unwrap();
        let from_int: PostId = serde_json::from_str("1042").unwrap();
        assert_eq!(from_str.as_str(), "p-1");
        assert_eq!(from_int.as_str(), "1042");
    }

    #[test]
    fn test_serialize_is_transparent() {
        let id = UserId::new("u-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-7\"");
        assert_eq!(id.to_string(), "u-7");
    }
}

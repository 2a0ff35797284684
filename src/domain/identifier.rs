//! Aggregate identifiers
//!
//! Opaque string identities. Equality is by value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! impl_string_identifier {
    ($t:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            /// Generate a fresh identifier (UUID v4, lowercase, no hyphens).
            pub fn unique() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// Wrap an existing identifier value verbatim.
            pub fn from(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn value(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_identifier!(CategoryId, "Identifier of a [`Category`](crate::domain::Category).");
impl_string_identifier!(GenreId, "Identifier of a [`Genre`](crate::domain::Genre).");
impl_string_identifier!(
    CastMemberId,
    "Identifier of a [`CastMember`](crate::domain::CastMember)."
);

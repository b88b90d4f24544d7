//! Opaque identifiers for the three entity kinds.
//!
//! Each id is a newtype around the `String` handed out by an
//! [`IdGenerator`](crate::id_gen::IdGenerator). Keeping them distinct types means a
//! `BranchId` can never be passed where a `ProductId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Type-safe identifier for Franchises.
    FranchiseId
);
opaque_id!(
    /// Type-safe identifier for Branches, unique within their Franchise.
    BranchId
);
opaque_id!(
    /// Type-safe identifier for Products, unique within their Branch.
    ProductId
);

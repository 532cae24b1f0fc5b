use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

macro_rules! define_id {
    ($id_name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_name(String);

        impl $id_name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn raw(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn inner(&self) -> &str {
                &self.0
            }
        }

        impl Default for $id_name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<String> for $id_name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Display for $id_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(UserId);
define_id!(WebinarId);

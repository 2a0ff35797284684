//! Cast member kind

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl CastMemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "ACTOR",
            Self::Director => "DIRECTOR",
        }
    }
}

impl std::fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CastMemberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTOR" => Ok(Self::Actor),
            "DIRECTOR" => Ok(Self::Director),
            other => Err(format!("Unknown cast member type: {}", other)),
        }
    }
}

use serde::{Deserialize, Serialize};

/// A confirmed team: two players who nominated each other
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub String, pub String);

impl Team {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self(first.into(), second.into())
    }

    pub fn members(&self) -> [&str; 2] {
        [&self.0, &self.1]
    }
}

use serde::{Deserialize, Serialize};

use theater_core::PlayId;

/// One scheduled showing of a play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID", alias = "play_id")]
    play_id: PlayId,
    audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }

    pub fn play_id(&self) -> &PlayId {
        &self.play_id
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }
}

/// One customer's performances, billed together.
///
/// Performance order is the order of the statement lines. An invoice with no
/// performances is valid and bills nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    #[serde(default)]
    performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }

    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five card families of the Terrible Teddies catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Action,
    Trap,
    Special,
    Defense,
    Boost,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Action => "Action",
            CardType::Trap => "Trap",
            CardType::Special => "Special",
            CardType::Defense => "Defense",
            CardType::Boost => "Boost",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planned, not-yet-generated catalog item. Immutable once planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub energy_cost: i32,
}

/// A spec plus its committed artifact reference, as written to the row
/// store. At most one record per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub energy_cost: i32,
    pub url: String,
    pub prompt: String,
}

/// One element of `cards.json` as produced by the card-design stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDesign {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub energy_cost: i32,
    pub effect: String,
}

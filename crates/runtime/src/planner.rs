use crate::card::{CardSpec, CardType};

pub const CARD_TYPES: [CardType; 5] = [
    CardType::Action,
    CardType::Trap,
    CardType::Special,
    CardType::Defense,
    CardType::Boost,
];

pub const CARDS_PER_TYPE: usize = 8;

pub const MIN_ENERGY_COST: i32 = 1;
pub const MAX_ENERGY_COST: i32 = 5;

/// Enumerates the full catalog in a stable order: every card type in
/// declaration order, eight cards each. Energy costs are rolled per card;
/// the composition itself never varies.
pub fn plan() -> Vec<CardSpec> {
    let mut specs = Vec::with_capacity(CARD_TYPES.len() * CARDS_PER_TYPE);
    for card_type in CARD_TYPES {
        for i in 1..=CARDS_PER_TYPE {
            specs.push(CardSpec {
                name: format!("{} Teddy {}", card_type, i),
                card_type,
                energy_cost: rand::random_range(MIN_ENERGY_COST..=MAX_ENERGY_COST),
            });
        }
    }
    specs
}

use anyhow::Result;
use tempfile::TempDir;

use teddies_runtime::{CardDesign, FsStore};

fn design(name: &str, card_type: &str, energy_cost: i32, effect: &str) -> CardDesign {
    CardDesign {
        name: name.to_string(),
        card_type: card_type.to_string(),
        energy_cost,
        effect: effect.to_string(),
    }
}

#[test]
fn catalog_round_trips_in_order() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FsStore::new(dir.path());

    let cards = vec![
        design("Trap Teddy 2", "Trap", 5, "Counter the next attack."),
        design("Boost Teddy 1", "Boost", 1, "Gain 2 energy."),
    ];
    store.save_catalog(&cards)?;

    let read_back = store.load_catalog()?;
    assert_eq!(read_back, cards);

    let raw = std::fs::read_to_string(dir.path().join("src/data/cards.json"))?;
    // Pretty-printed with 2-space indent, `type` under its wire name.
    assert!(raw.starts_with("[\n  {"));
    assert!(raw.contains("\"type\": \"Trap\""));

    Ok(())
}

#[test]
fn image_writes_create_parents_and_overwrite() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FsStore::new(dir.path());

    let path = store.save_card_image(1, b"first")?;
    assert_eq!(path, dir.path().join("public/card_images/card_1.png"));

    store.save_card_image(1, b"second")?;
    assert_eq!(std::fs::read(&path)?, b"second");

    Ok(())
}

#[test]
fn documents_land_under_the_data_dir() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FsStore::new(dir.path());

    store.save_rules("# Rules\n\nDraw a card.")?;
    store.save_lore("# Lore\n\nOnce upon a bear.")?;

    let rules = std::fs::read_to_string(dir.path().join("src/data/game_rules.md"))?;
    assert!(rules.starts_with("# Rules"));
    assert!(dir.path().join("src/data/game_lore.md").exists());

    Ok(())
}

use std::fs;
use std::path::PathBuf;

use crate::card::CardDesign;
use crate::error::StoreError;

pub const CARD_IMAGE_DIR: &str = "public/card_images";
pub const DATA_DIR: &str = "src/data";

/// Filesystem sink for the generated asset tree. Parent directories are
/// created on demand; rewriting a path overwrites (last writer wins).
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn image_dir(&self) -> PathBuf {
        self.root.join(CARD_IMAGE_DIR)
    }

    fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    fn write(&self, dir: PathBuf, file: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&dir)?;
        let path = dir.join(file);
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// `card_<index>.png`, 1-based to match catalog order.
    pub fn save_card_image(&self, index: usize, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        self.write(self.image_dir(), &format!("card_{}.png", index), bytes)
    }

    pub fn save_catalog(&self, cards: &[CardDesign]) -> Result<PathBuf, StoreError> {
        let json = serde_json::to_string_pretty(cards)?;
        self.write(self.data_dir(), "cards.json", json.as_bytes())
    }

    pub fn load_catalog(&self) -> Result<Vec<CardDesign>, StoreError> {
        let raw = fs::read_to_string(self.data_dir().join("cards.json"))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save_rules(&self, markdown: &str) -> Result<PathBuf, StoreError> {
        self.write(self.data_dir(), "game_rules.md", markdown.as_bytes())
    }

    pub fn save_lore(&self, markdown: &str) -> Result<PathBuf, StoreError> {
        self.write(self.data_dir(), "game_lore.md", markdown.as_bytes())
    }
}

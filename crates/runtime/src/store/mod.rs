mod fs;
mod table;

pub use fs::{FsStore, CARD_IMAGE_DIR, DATA_DIR};
pub use table::{CardSink, TableStore, CARD_TABLE};

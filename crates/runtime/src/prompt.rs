use serde::Serialize;

use crate::card::CardSpec;

/// Mood vocabulary: one entry is drawn per prompt so cards of the same
/// type do not collapse into one look.
pub const MOODS: [&str; 5] = ["mischievous", "adorable", "fierce", "sleepy", "excited"];

pub const ART_STYLE: &str = "Cartoon style, vibrant colors, white background.";

pub const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    Url,
    B64Json,
}

/// One image-generation request. Ephemeral: built per card, consumed by a
/// single generation call.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePrompt {
    pub text: String,
    pub size: String,
    pub response_format: ResponseFormat,
}

/// Interpolates the card's type and name into the house template.
pub fn build_image_prompt(spec: &CardSpec) -> ImagePrompt {
    let mood = MOODS[rand::random_range(0..MOODS.len())];
    ImagePrompt {
        text: format!(
            "A cute teddy bear as a {} card for a card game called Terrible Teddies. \
             The teddy should look {} and be doing an action related to its type. \
             {} The card name is {}.",
            spec.card_type, mood, ART_STYLE, spec.name
        ),
        size: IMAGE_SIZE.to_string(),
        response_format: ResponseFormat::Url,
    }
}

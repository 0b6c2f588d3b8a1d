use teddies_runtime::{
    build_image_prompt, CardSpec, CardType, ResponseFormat, ART_STYLE, IMAGE_SIZE, MOODS,
};

fn spec(name: &str, card_type: CardType) -> CardSpec {
    CardSpec {
        name: name.to_string(),
        card_type,
        energy_cost: 3,
    }
}

#[test]
fn prompt_carries_name_type_and_style() {
    let prompt = build_image_prompt(&spec("Trap Teddy 3", CardType::Trap));

    assert!(prompt.text.contains("Trap Teddy 3"));
    assert!(prompt.text.contains("Trap"));
    assert!(prompt.text.contains(ART_STYLE));
    assert_eq!(prompt.size, IMAGE_SIZE);
    assert_eq!(prompt.response_format, ResponseFormat::Url);
}

#[test]
fn mood_comes_from_the_fixed_vocabulary() {
    let spec = spec("Boost Teddy 1", CardType::Boost);
    for _ in 0..32 {
        let prompt = build_image_prompt(&spec);
        assert!(
            MOODS.iter().any(|mood| prompt.text.contains(mood)),
            "no known mood in: {}",
            prompt.text
        );
    }
}

#[test]
fn response_format_serializes_to_wire_names() {
    assert_eq!(
        serde_json::to_value(ResponseFormat::Url).unwrap(),
        serde_json::json!("url")
    );
    assert_eq!(
        serde_json::to_value(ResponseFormat::B64Json).unwrap(),
        serde_json::json!("b64_json")
    );
}

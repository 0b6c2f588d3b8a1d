use base64::Engine;

use teddies_runtime::GenerationArtifact;

#[test]
fn stored_ref_renders_both_shapes() {
    let url = GenerationArtifact::Url("https://cdn.example/card.png".to_string());
    assert_eq!(url.stored_ref(), "https://cdn.example/card.png");

    let inline = GenerationArtifact::Inline(vec![1, 2, 3, 4]);
    let stored = inline.stored_ref();
    let payload = stored.strip_prefix("data:image/png;base64,").unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .unwrap();
    assert_eq!(decoded, vec![1, 2, 3, 4]);
}

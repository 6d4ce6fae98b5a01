use contracts::domain::common::CardSource;

/// Tags to show on a card, at most `max`.
///
/// The nested card tag list wins when it has any usable entry; otherwise the
/// legacy top-level list is used. Tags are trimmed, blanks dropped and repeats
/// (ignoring case) removed before taking the first `max`, in original order.
pub fn resolve_display_tags<R: CardSource + ?Sized>(resource: &R, max: usize) -> Vec<String> {
    let card_tags = resource.card().map(|c| c.tags.as_slice()).unwrap_or_default();
    let source = if has_usable_tag(card_tags) {
        card_tags
    } else {
        resource.legacy_tags()
    };

    let mut seen: Vec<String> = Vec::new();
    let mut tags = Vec::new();
    for tag in source.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if tags.len() >= max {
            break;
        }
        let folded = tag.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        tags.push(tag.to_string());
    }
    tags
}

fn has_usable_tag(tags: &[String]) -> bool {
    tags.iter().any(|t| !t.trim().is_empty())
}

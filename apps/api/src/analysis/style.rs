//! Communication-style classifier — the keyword-ratio heuristic that decides
//! which register generated messages are written in.
//!
//! Matching is substring containment over the concatenated lowercase profile
//! text, not word-boundary matching. The bucket thresholds were tuned against
//! that behavior; do not "fix" it to whole-word matching without retuning.

use crate::models::profile::{CommunicationStyle, StyleMetrics};

/// Casual internet shorthand. Any hit also sets `uses_slang`.
const SLANG_WORDS: &[&str] = &[
    "lol", "omg", "tbh", "ngl", "idk", "gonna", "wanna", "kinda", "dunno",
];

/// Common abbreviations. Any hit sets `uses_abbreviations`.
const ABBREVIATIONS: &[&str] = &["asap", "etc", "fyi", "btw", "imho", "imo"];

/// Corporate-register signal words.
const FORMAL_WORDS: &[&str] = &[
    "professional",
    "expertise",
    "leverage",
    "synergy",
    "strategic",
    "initiative",
    "implement",
];

/// Casual-register signal words counted alongside the slang list.
const INFORMAL_EXTRA_WORDS: &[&str] = &["cool", "awesome", "love", "hate", "fun"];

/// Classifies communication style from profile text.
///
/// Computes `formal_ratio = formal_hits / (formal_hits + informal_hits)`
/// (0.5 when neither list matches) and maps it to a bucket, formal checks
/// first:
/// - ratio ≥ 0.75 → Formal
/// - ratio ≥ 0.55 → SemiFormal
/// - ratio ≤ 0.25 → VeryCasual
/// - ratio ≤ 0.45 → Casual
/// - otherwise    → Mixed
pub fn classify_style(
    bio: &str,
    about: &str,
    recent_activity: &[String],
) -> (CommunicationStyle, StyleMetrics) {
    let text = format!("{} {} {}", bio, about, recent_activity.join(" ")).to_lowercase();

    let formal_count = FORMAL_WORDS.iter().filter(|w| text.contains(*w)).count();
    let informal_count = SLANG_WORDS
        .iter()
        .chain(INFORMAL_EXTRA_WORDS.iter())
        .filter(|w| text.contains(*w))
        .count();

    let total = formal_count + informal_count;
    let formal_ratio = if total > 0 {
        formal_count as f64 / total as f64
    } else {
        0.5
    };

    let metrics = StyleMetrics {
        uses_emojis: contains_emoji(&text),
        uses_slang: SLANG_WORDS.iter().any(|w| text.contains(w)),
        uses_abbreviations: ABBREVIATIONS.iter().any(|a| text.contains(a)),
        formal_ratio,
    };

    (style_from_ratio(formal_ratio), metrics)
}

/// Maps a formal ratio to its style bucket. Order matters: the two formal
/// thresholds are checked before the two casual ones.
pub fn style_from_ratio(ratio: f64) -> CommunicationStyle {
    if ratio >= 0.75 {
        CommunicationStyle::Formal
    } else if ratio >= 0.55 {
        CommunicationStyle::SemiFormal
    } else if ratio <= 0.25 {
        CommunicationStyle::VeryCasual
    } else if ratio <= 0.45 {
        CommunicationStyle::Casual
    } else {
        CommunicationStyle::Mixed
    }
}

/// True when the text contains a char in the emoticon, misc-symbol,
/// transport, or regional-indicator Unicode blocks.
fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c as u32,
            0x1F600..=0x1F64F | 0x1F300..=0x1F5FF | 0x1F680..=0x1F6FF | 0x1F1E0..=0x1F1FF
        )
    })
}

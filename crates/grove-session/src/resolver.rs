//! Multi-tier lexical action resolution.
//!
//! Maps noisy free-text (or a short code) to one of a scene's declared
//! choices. Three tiers, strongest first; within a tier, choices are
//! scanned in declared order and the first hit wins. The policy is
//! intentionally permissive — a wrong-but-plausible match is preferred
//! over rejecting varied phrasing — and determinism comes solely from
//! declared choice order. Downstream scenario tests depend on these exact
//! tier semantics; do not swap in edit-distance or similar.

use grove_core::{Choice, ChoiceId};

/// How many leading description words the phrase-overlap tier considers.
const PHRASE_WORDS: usize = 4;

/// Resolve raw player input against a scene's choices.
///
/// Tiers, evaluated in order:
/// 1. exact: the normalized input (trimmed, lowercased) equals a choice id;
/// 2. phrase overlap: the input contains the choice id as a substring, or
///    any of the first four words of the choice description occurs in the
///    input;
/// 3. keyword fallback: any word of the choice description occurs in the
///    input.
///
/// Returns `None` when no tier matches. Pure function; identical inputs
/// always resolve identically.
pub fn resolve<'a>(choices: &'a [Choice], raw: &str) -> Option<&'a ChoiceId> {
    let input = raw.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    for choice in choices {
        if input == choice.id.as_str() {
            return Some(&choice.id);
        }
    }

    for choice in choices {
        let description = choice.description.to_lowercase();
        if input.contains(choice.id.as_str())
            || description
                .split_whitespace()
                .take(PHRASE_WORDS)
                .any(|word| input.contains(word))
        {
            return Some(&choice.id);
        }
    }

    for choice in choices {
        let description = choice.description.to_lowercase();
        if description
            .split_whitespace()
            .any(|word| input.contains(word))
        {
            return Some(&choice.id);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro_choices() -> Vec<Choice> {
        vec![
            Choice::new("follow_trail", "Walk toward the misty forest trail.", "trail"),
            Choice::new(
                "inspect_monolith",
                "Approach the glowing stone monolith.",
                "monolith",
            ),
            Choice::new("check_camp", "Investigate the ranger's camp.", "camp"),
        ]
    }

    fn resolved(input: &str) -> Option<String> {
        resolve(&intro_choices(), input).map(|id| id.as_str().to_string())
    }

    #[test]
    fn exact_id_match() {
        assert_eq!(resolved("follow_trail").as_deref(), Some("follow_trail"));
        assert_eq!(resolved("  CHECK_CAMP  ").as_deref(), Some("check_camp"));
    }

    #[test]
    fn id_embedded_in_phrase() {
        assert_eq!(
            resolved("i want to inspect_monolith please").as_deref(),
            Some("inspect_monolith")
        );
    }

    #[test]
    fn phrase_overlap_on_description_words() {
        // "walk" is among the first four words of follow_trail's description.
        assert_eq!(
            resolved("walk toward the mist").as_deref(),
            Some("follow_trail")
        );
        // "investigate" leads check_camp's description, and no earlier
        // choice's leading words occur in the input.
        assert_eq!(
            resolved("investigate around").as_deref(),
            Some("check_camp")
        );
    }

    #[test]
    fn common_words_match_permissively() {
        // "the" sits in follow_trail's four-word window and occurs inside
        // "there", so the first declared choice wins. Deliberate: the
        // policy trades precision for robustness.
        assert_eq!(
            resolved("investigate over there").as_deref(),
            Some("follow_trail")
        );
    }

    #[test]
    fn keyword_fallback_reaches_later_words() {
        let choices = vec![
            Choice::new("wait", "Hold position quietly near cover", "intro"),
            Choice::new("light_fire", "Kindle flames using dry branches", "intro"),
        ];
        // "branches" sits past the four-word window, so only tier 3 sees it.
        let id = resolve(&choices, "find some branches").unwrap();
        assert_eq!(id.as_str(), "light_fire");
    }

    #[test]
    fn exact_beats_overlapping_description() {
        // A choice whose description quotes another choice's id must still
        // lose to the exact id match.
        let choices = vec![
            Choice::new("shout", "Yell follow_trail at the trees.", "intro"),
            Choice::new("follow_trail", "Walk toward the trail.", "trail"),
        ];
        let id = resolve(&choices, "follow_trail").unwrap();
        assert_eq!(id.as_str(), "follow_trail");
    }

    #[test]
    fn declared_order_breaks_ties() {
        // "the" appears in both descriptions; the first declared choice wins.
        let choices = vec![
            Choice::new("a", "Open the door.", "intro"),
            Choice::new("b", "Close the window.", "intro"),
        ];
        assert_eq!(resolve(&choices, "the").unwrap().as_str(), "a");
    }

    #[test]
    fn no_match_returns_none() {
        assert_eq!(resolved("xyzzy plugh"), None);
        assert_eq!(resolved(""), None);
        assert_eq!(resolved("   "), None);
    }

    #[test]
    fn no_choices_no_match() {
        assert!(resolve(&[], "anything").is_none());
    }

    #[test]
    fn deterministic_over_repeated_calls() {
        let choices = intro_choices();
        let first = resolve(&choices, "go check the camp").cloned();
        for _ in 0..10 {
            assert_eq!(resolve(&choices, "go check the camp").cloned(), first);
        }
    }
}

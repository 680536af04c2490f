//! Offline mood classification: keyword scan with a negation check.
//!
//! [`classify`] maps any string to a [`Mood`]. It never fails. The algorithm
//! is a single pass over the [`KEYWORD_TABLE`]:
//!
//! 1. Empty or whitespace-only text is neutral.
//! 2. The text is lowercased; nothing else is normalized (no tokenizing, no
//!    punctuation stripping, no stemming).
//! 3. Moods are scanned in table order, keywords in list order. A keyword
//!    matches if it is a substring of the lowercased text, even inside a
//!    longer word.
//! 4. The first match decides. If a negation word sits next to it (one space,
//!    either side) the mood is flipped with [`MoodLabel::negated`].
//! 5. Text with no match is neutral.
//!
//! There is no scoring: a text containing keywords of several moods gets the
//! mood scanned first, whichever keyword appears first in the text.
//!
//! # Examples
//!
//! ```
//! use mood_classifier::classify;
//! use mood_core::MoodLabel;
//!
//! assert_eq!(classify("I am so happy today").mood, MoodLabel::Happy);
//! assert_eq!(classify("not happy").mood, MoodLabel::Sad);
//! assert_eq!(classify("ghussa nahi").mood, MoodLabel::Neutral);
//! ```

use mood_core::{Mood, MoodLabel};
use mood_lexicon::{KEYWORD_TABLE, is_negated};

/// The keyword that decided a classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Mood whose list contains the keyword.
    pub table_mood: MoodLabel,
    /// The keyword, as written in the table.
    pub keyword: &'static str,
    /// Whether a negation word was adjacent to it.
    pub negated: bool,
}

impl KeywordMatch {
    /// The mood this match resolves to, after the negation flip.
    pub fn mood(&self) -> MoodLabel {
        if self.negated {
            self.table_mood.negated()
        } else {
            self.table_mood
        }
    }
}

/// Find the keyword that decides the mood of `text`, if any.
///
/// Returns `None` for blank text and for text containing no keyword.
pub fn matched_keyword(text: &str) -> Option<KeywordMatch> {
    if text.trim().is_empty() {
        return None;
    }

    let lower = text.to_lowercase();

    for (mood, keywords) in KEYWORD_TABLE {
        for keyword in keywords.iter() {
            if !lower.contains(keyword) {
                continue;
            }
            return Some(KeywordMatch {
                table_mood: *mood,
                keyword: *keyword,
                negated: is_negated(&lower, keyword),
            });
        }
    }

    None
}

/// Classify `text` into a mood and its glyph.
pub fn classify(text: &str) -> Mood {
    match matched_keyword(text) {
        Some(hit) => {
            let mood = hit.mood();
            tracing::trace!(
                keyword = hit.keyword,
                table_mood = %hit.table_mood,
                negated = hit.negated,
                %mood,
                "mood keyword matched"
            );
            Mood::from(mood)
        }
        None => Mood::NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;
    use rand::{Rng, SeedableRng};

    fn mood_of(text: &str) -> MoodLabel {
        classify(text).mood
    }

    // --- Blank and unmatched input ---

    #[test]
    fn empty_is_neutral() {
        assert_eq!(classify(""), Mood::NEUTRAL);
        assert_eq!(classify("").emoji, "😐");
    }

    #[test]
    fn whitespace_only_is_neutral() {
        for text in [" ", "   \n\t", "\r\n", "\u{3000}"] {
            assert_eq!(classify(text), Mood::NEUTRAL, "{text:?}");
        }
    }

    #[test]
    fn no_keyword_is_neutral() {
        for text in [
            "the weather",
            "meeting at noon",
            "what a day",
            "Had lunch, went for a walk.",
            "Read a book and slept early.",
            "xyz 123",
        ] {
            assert_eq!(mood_of(text), MoodLabel::Neutral, "{text:?}");
        }
    }

    // --- Direct matches ---

    #[test]
    fn plain_happy() {
        let mood = classify("I am so happy today");
        assert_eq!(mood.mood, MoodLabel::Happy);
        assert_eq!(mood.emoji, "😊");
    }

    #[test]
    fn roman_urdu_sad() {
        let mood = classify("dil dukhi hai");
        assert_eq!(mood.mood, MoodLabel::Sad);
        assert_eq!(mood.emoji, "😢");
    }

    #[test]
    fn each_mood_reachable() {
        assert_eq!(mood_of("I am furious"), MoodLabel::Angry);
        assert_eq!(mood_of("ghussa aa gaya"), MoodLabel::Angry);
        assert_eq!(mood_of("so much pressure at work"), MoodLabel::Stressed);
        assert_eq!(mood_of("kaam ka pressure"), MoodLabel::Stressed);
        assert_eq!(mood_of("thak gaya"), MoodLabel::Stressed);
        assert_eq!(classify("overthinking").emoji, "😫");
        assert_eq!(classify("i hate mondays").emoji, "😠");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(mood_of("HAPPY"), MoodLabel::Happy);
        assert_eq!(mood_of("Tired"), MoodLabel::Sad);
        assert_eq!(mood_of("GhUsSa"), MoodLabel::Angry);
    }

    #[test]
    fn punctuation_is_not_stripped_but_does_not_block() {
        assert_eq!(mood_of("HAPPY!!!"), MoodLabel::Happy);
        assert_eq!(mood_of("(udaas)"), MoodLabel::Sad);
    }

    // --- Substring semantics ---

    #[test]
    fn keyword_matches_inside_longer_word() {
        assert_eq!(mood_of("I feel unhappy"), MoodLabel::Happy);
        assert_eq!(mood_of("madness"), MoodLabel::Angry);
        assert_eq!(mood_of("nomad life"), MoodLabel::Angry);
    }

    #[test]
    fn bare_stressed_hits_sad_list_first() {
        // "stress" sits in the sad list, which is scanned before stressed.
        assert_eq!(mood_of("stressed"), MoodLabel::Sad);
        let hit = matched_keyword("stressed").unwrap();
        assert_eq!(hit.keyword, "stress");
        assert_eq!(hit.table_mood, MoodLabel::Sad);
    }

    #[test]
    fn earlier_keyword_in_list_wins_over_longer_variant() {
        // "khush" precedes "khushi", so "khushi na" is checked as "khush",
        // and "khush na" is not in the text.
        let hit = matched_keyword("khushi na").unwrap();
        assert_eq!(hit.keyword, "khush");
        assert!(!hit.negated);
        assert_eq!(mood_of("khushi na"), MoodLabel::Happy);
    }

    // --- Negation ---

    #[test]
    fn negated_happy_is_sad() {
        let mood = classify("not happy");
        assert_eq!(mood.mood, MoodLabel::Sad);
        assert_eq!(mood.emoji, "😢");
        assert_eq!(mood_of("Not Happy"), MoodLabel::Sad);
        assert_eq!(mood_of("khush nahi"), MoodLabel::Sad);
    }

    #[test]
    fn negation_after_keyword() {
        assert_eq!(mood_of("happy not"), MoodLabel::Sad);
        assert_eq!(mood_of("dukhi nahin"), MoodLabel::Happy);
    }

    #[test]
    fn negated_sad_is_happy() {
        assert_eq!(mood_of("not sad"), MoodLabel::Happy);
    }

    #[test]
    fn negated_angry_is_neutral() {
        let mood = classify("ghussa nahi");
        assert_eq!(mood.mood, MoodLabel::Neutral);
        assert_eq!(mood.emoji, "😐");
        assert_eq!(mood_of("nahi ghussa"), MoodLabel::Neutral);
        assert_eq!(mood_of("not angry"), MoodLabel::Neutral);
        assert_eq!(mood_of("angry na"), MoodLabel::Neutral);
    }

    #[test]
    fn negated_stressed_is_neutral() {
        assert_eq!(mood_of("pareshan nahi"), MoodLabel::Neutral);
        assert_eq!(mood_of("tense nahi"), MoodLabel::Neutral);
    }

    #[test]
    fn not_stressed_flips_the_sad_match() {
        // Decided by the sad keyword "stress", negated to happy.
        assert_eq!(mood_of("i am not stressed"), MoodLabel::Happy);
        assert_eq!(mood_of("stressed nahi"), MoodLabel::Sad);
    }

    #[test]
    fn negation_requires_single_space() {
        assert_eq!(mood_of("not, happy"), MoodLabel::Happy);
        assert_eq!(mood_of("not  happy"), MoodLabel::Happy);
    }

    #[test]
    fn negation_is_a_substring_check() {
        assert_eq!(mood_of("cannot happy"), MoodLabel::Sad);
    }

    // --- Ordering ---

    #[test]
    fn happy_list_beats_stressed_list() {
        assert_eq!(mood_of("happy but stressed"), MoodLabel::Happy);
        assert_eq!(mood_of("overthinking but good"), MoodLabel::Happy);
    }

    #[test]
    fn table_order_not_text_order() {
        assert_eq!(mood_of("I am angry and happy"), MoodLabel::Happy);
        assert_eq!(mood_of("worried and lonely"), MoodLabel::Sad);
    }

    #[test]
    fn matched_keyword_reports_decision() {
        let hit = matched_keyword("ghussa nahi").unwrap();
        assert_eq!(
            hit,
            KeywordMatch {
                table_mood: MoodLabel::Angry,
                keyword: "ghussa",
                negated: true,
            }
        );
        assert_eq!(hit.mood(), MoodLabel::Neutral);
        assert!(matched_keyword("   ").is_none());
        assert!(matched_keyword("meeting at noon").is_none());
    }

    // --- Totality and purity ---

    #[test]
    fn idempotent() {
        for text in ["not happy", "dil dukhi hai", "", "madness", "pareshan nahi"] {
            assert_eq!(classify(text), classify(text));
        }
    }

    #[test]
    fn random_text_is_total_and_stable() {
        let pieces = [
            "happy", "not", "nahi", "na", " ", "  ", ",", "!", "sad", "ghussa", "pressure", "x",
            "Khush", "ß", "é", "\u{1F600}", "\n", "mad", "tense", "123",
        ];
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let len = rng.random_range(0..12);
            let text: String = (0..len)
                .map(|_| *pieces.choose(&mut rng).unwrap())
                .collect();
            let first = classify(&text);
            assert_eq!(first, classify(&text), "{text:?}");
            assert_eq!(first.emoji, first.mood.emoji());
        }
    }

    #[test]
    fn ascii_case_does_not_matter() {
        let mut rng = SmallRng::seed_from_u64(7);
        let words = ["Happy", "NOT", "sad", "Nahi", "ghussa", "Tense", "day", "fikr"];
        for _ in 0..200 {
            let text = (0..rng.random_range(1..5))
                .map(|_| *words.choose(&mut rng).unwrap())
                .collect::<Vec<_>>()
                .join(" ");
            assert_eq!(
                classify(&text.to_ascii_uppercase()),
                classify(&text.to_ascii_lowercase()),
                "{text:?}"
            );
        }
    }

    #[test]
    fn concurrent_callers_agree() {
        let texts = ["not happy", "dil dukhi hai", "ghussa nahi", "fikr", ""];
        let expected: Vec<Mood> = texts.iter().map(|t| classify(t)).collect();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let got: Vec<Mood> = texts.iter().map(|t| classify(t)).collect();
                    assert_eq!(got, expected);
                });
            }
        });
    }
}

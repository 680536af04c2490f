//! Mood keyword tables: English and Roman Urdu keywords per mood, plus the
//! negation words used to flip a match.
//!
//! Everything here is static data compiled into the binary. Lookup order is
//! part of the contract:
//!
//! 1. Moods are scanned in [`KEYWORD_TABLE`] order: happy, sad, angry,
//!    stressed.
//! 2. Within a mood, keywords are scanned in list order.
//!
//! Lists overlap (`tension`, `upset` and `frustrated` appear under
//! more than one mood) and carry misspelled and repeated variants. Entries are
//! never normalized against each other; the first hit in scan order wins.

use mood_core::MoodLabel;

/// Words that negate an adjacent keyword.
///
/// Adjacency means exactly one ASCII space between the negation word and the
/// keyword, on either side.
pub const NEGATIONS: &[&str] = &["nahi", "na", "nahin", "not"];

const HAPPY: &[&str] = &[
    "happy", "joy", "khush", "khushi", "mast", "mazedaar", "hansi", "masti", "smile", "laugh",
    "awesome", "fantastic", "good", "yay", "amazing", "great", "excited", "delighted", "sunny",
    "bright", "cheerful", "smiley", "lovely", "fun", "party", "funny", "hepi", "heppy",
    "joyful", "pleasant", "thrilled", "content", "blessed", "excellent", "wonderful", "perfect",
    "super", "cool", "positive", "funf", "bliss", "sunshine", "joyous", "loving", "goodvibes",
    "smileface", "happygood", "hahaha", "hehe", "lol", "funniest", "enjoy", "yippee", "bestday",
    "fantasticday", "happytime", "happyface", "awesomeee", "joyfull", "smiling", "goodtime",
    "cheery", "laughing", "exciting", "smileyface", "cheerfulday", "happyfeel", "happyvibes",
    "lovelyday", "joyfulmoment", "yayyay", "goodmood", "funfun", "hepii", "hepiii",
    "happydayyy", "partytime", "funvibes", "positivevibes", "sunnyday", "happylife",
    "joyfullife", "smileyday", "funfilled", "awesomefun", "greattime", "happyenergy",
    "khushi hui", "bohot khush", "dil khush", "masti mein", "hansi aayi", "maze aya",
    "khushi ka mahsoos", "achha lag raha", "mauj masti",
];

const SAD: &[&str] = &[
    "sad", "udaas", "dukhi", "lonely", "cry", "heartbroken", "down", "tired", "pain", "grief",
    "stress", "tension", "blue", "melancholy", "tear", "broken", "sorrow", "upset", "hopeless",
    "helpless", "frustrated", "woe", "hurt", "loss", "udaasi", "dukhiya", "niraash",
    "dil dukhi", "udasi ka ehsaas", "dukhi hoon", "sadface", "tearful", "crying", "weep",
    "sadmoment", "sadfeeling", "painfulday", "sadday", "sadlife", "badmood", "upsetface",
    "lonelytime", "tragic", "tragically", "miserable", "troublesome", "depressing", "sadly",
    "blehday", "heartache", "brokenheart", "lonelyyy", "sadness", "sadnessss", "downcast",
    "melancholic", "depressinggg", "woeful", "lossfeel", "tearfeeling", "sadfeelinggg",
    "sadfacee", "downfeeling", "lonelyface", "painfeeling", "blehfeeling", "troubled",
    "dukhi mehsoos", "dukhi feel", "dard mehsoos", "udasi mehsoos",
];

const ANGRY: &[&str] = &[
    "angry", "ghussa", "gusy", "marunga", "chorunga", "gussy", "naraz", "rage", "furious",
    "annoyed", "hate", "mad", "irritated", "pissed", "frustrated", "upset", "annoy", "grumpy",
    "tension", "anger", "ghusse", "narazgi", "ghussewala", "ghussaa", "angery", "angeryyy",
    "madface", "rageface", "furiousface", "annoyedface", "angriness", "madfeeling", "upsetface",
    "hatefeel", "frustratedface", "pissedoff", "irritatedface", "angryday", "ragefeel",
    "annoying", "irritation", "temper", "fuming", "boiling", "infuriated", "madmoment",
    "naraz hoon", "ghussa aa gaya", "ghussa aaya", "dil naraz", "ghusse ka ehsaas",
    "narazgi ka ehsaas", "narazfeel",
];

const STRESSED: &[&str] = &[
    "stressed", "pareshan", "tang", "thak", "pressure", "overworked", "nervous", "tense",
    "fatigue", "burnout", "panic", "overthinking", "stresst", "stressedout", "pressurefeel",
    "overworkedday", "worried", "tensed", "tension", "stressedday", "burnoutfeel",
    "overthinkingfeel", "fatigued", "frustratedfeel", "worriedday", "panicfeel", "tiredday",
    "exhaustedfeel", "stresstime", "overloaded", "anxious", "nervousfeel", "strain",
    "tensefeel", "tiredfeel", "stressface", "fatiguefeel", "anxiety", "anxiousday", "overload",
    "overloadfeel", "burnedout", "fatigueday", "panicky", "tensedday", "stressedtime",
    "tensionday", "exhaustion", "overthinkingday", "panicday", "nervousday", "pressurefeeling",
    "stressedface", "fatigueface", "tiredface", "worriedfacee", "overwork", "stressedmood",
    "strainface", "overthinkingface", "burnedoutday", "stresstime", "panicface",
    "anxiousmoment", "tiredmoment", "overloaded", "worriedmoment", "frustratedtime",
    "overthinkingmoment", "stressedmoment", "pressuremoment", "fatiguemoment", "stressmoment",
    "burnoutmoment", "soch raha", "fikr", "dimaag mein tension", "kaam ka pressure",
    "stress mehsoos", "pareshani", "thakan", "tanaav", "overthinking ka ehsaas",
];
/// Keywords per mood, in scan order. `Neutral` has no keywords.
pub static KEYWORD_TABLE: &[(MoodLabel, &[&str])] = &[
    (MoodLabel::Happy, HAPPY),
    (MoodLabel::Sad, SAD),
    (MoodLabel::Angry, ANGRY),
    (MoodLabel::Stressed, STRESSED),
];

/// Keyword list for a mood. Empty for `Neutral`.
pub fn keywords(mood: MoodLabel) -> &'static [&'static str] {
    KEYWORD_TABLE
        .iter()
        .find(|(label, _)| *label == mood)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Whether `keyword` appears in `text` directly preceded or followed by a
/// negation word and a single space.
///
/// `text` must already be lowercased. This is a literal substring test: it
/// does not look at word boundaries, so `"not happy"` inside
/// `"cannot happyness"` also counts.
pub fn is_negated(text: &str, keyword: &str) -> bool {
    NEGATIONS.iter().any(|neg| {
        text.contains(&format!("{neg} {keyword}")) || text.contains(&format!("{keyword} {neg}"))
    })
}

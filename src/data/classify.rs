// ---------------------------------------------------------------------------
// Classifier – assigns a gender code to a given name
// ---------------------------------------------------------------------------

/// Oracle consulted once per name at load time.
///
/// Returns a category code (`"m"` or `"w"`); the loader maps it onto
/// [`Category`](super::model::Category) and rejects anything else.
pub trait Classifier {
    fn classify(&self, name: &str) -> String;
}

/// Female names that do not end in `A` or `E`.
const FEMALE_OTHER_ENDINGS: &[&str] = &[
    "ABIGAIL", "ASTRID", "BABET", "CARMEN", "DAGMAR", "DORIS", "EDITH", "ELISABETH", "ESTER",
    "INGRID", "ISABEL", "JASMIN", "JUDIT", "KARIN", "KATRIN", "KRISTIN", "LILIAN", "MIRIAM",
    "NIKOL", "NOEMI", "RUT", "RUTH", "SUZAN", "VIVIEN",
];

/// Male names that end in a vowel typical for female names.
const MALE_VOWEL_ENDINGS: &[&str] = &[
    "ILJA", "JEREMIE", "JOSHUA", "KOSTJA", "LUKA", "MIKE", "NIKITA", "RENÉ", "SAVA", "VANJA",
];

/// Suffix heuristic for Czech given names.
///
/// Only the first word of a multi-word or hyphenated name is considered.
/// Names ending in `A`, `E` or `Ě` are female unless listed as exceptions;
/// everything else is male.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixClassifier;

impl Classifier for SuffixClassifier {
    fn classify(&self, name: &str) -> String {
        let first = name
            .split(|c: char| c == ' ' || c == '-')
            .next()
            .unwrap_or(name)
            .to_uppercase();

        let female = if FEMALE_OTHER_ENDINGS.contains(&first.as_str()) {
            true
        } else if MALE_VOWEL_ENDINGS.contains(&first.as_str()) {
            false
        } else {
            matches!(first.chars().last(), Some('A' | 'E' | 'Ě'))
        };

        let code = if female { "w" } else { "m" };
        code.to_string()
    }
}

//! Language Classification
//!
//! Script-based detection of Chinese versus English text and the rules for
//! splitting raw provider strings into bilingual field pairs.

use serde::{Deserialize, Serialize};

/// Detected language of a text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
    Mixed,
    Unknown,
}

/// A logical attribute with an optional Chinese and an optional English value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualField {
    pub chinese: Option<String>,
    pub english: Option<String>,
}

impl BilingualField {
    pub fn new(chinese: Option<String>, english: Option<String>) -> Self {
        Self {
            chinese: non_blank(chinese.as_deref()),
            english: non_blank(english.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chinese.is_none() && self.english.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.chinese.is_some() && self.english.is_some()
    }

    /// Chinese value if present, otherwise English.
    pub fn preferred(&self) -> Option<&str> {
        self.chinese.as_deref().or(self.english.as_deref())
    }

    pub fn chinese(&self) -> Option<&str> {
        self.chinese.as_deref()
    }

    pub fn english(&self) -> Option<&str> {
        self.english.as_deref()
    }

    fn fill_from(&mut self, other: BilingualField) {
        if self.chinese.is_none() {
            self.chinese = other.chinese;
        }
        if self.english.is_none() {
            self.english = other.english;
        }
    }
}

// ============================================================================
// Script Probes
// ============================================================================

/// CJK unified ideographs, extension A and compatibility ideographs.
fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}')
}

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

pub fn contains_latin_letters(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

pub fn cjk_count(text: &str) -> usize {
    text.chars().filter(|c| is_cjk(*c)).count()
}

pub fn latin_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

// ============================================================================
// Classification and Assignment
// ============================================================================

pub fn classify(text: &str) -> Language {
    let cjk = cjk_count(text);
    let latin = latin_count(text);
    match (cjk > 0, latin > 0) {
        (true, true) if cjk > latin => Language::Zh,
        (true, true) if latin > cjk => Language::En,
        (true, true) => Language::Mixed,
        (true, false) => Language::Zh,
        (false, true) => Language::En,
        (false, false) => Language::Unknown,
    }
}

/// Place one raw value on exactly one side of a bilingual pair.
///
/// The stored value is the trimmed text, not the raw input. Blank input
/// yields an empty field. Text with neither script lands on the English side.
pub fn assign(text: &str) -> BilingualField {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return BilingualField::default();
    }
    let value = Some(trimmed.to_string());
    let chinese_side = match classify(trimmed) {
        Language::Zh => true,
        Language::En | Language::Unknown => false,
        Language::Mixed => cjk_count(trimmed) > latin_count(trimmed),
    };
    if chinese_side {
        BilingualField {
            chinese: value,
            english: None,
        }
    } else {
        BilingualField {
            chinese: None,
            english: value,
        }
    }
}

/// Keep known per-language values and fill empty sides from `fallback`.
pub fn merge(
    existing_zh: Option<&str>,
    existing_en: Option<&str>,
    fallback: Option<&str>,
) -> BilingualField {
    let mut field = BilingualField {
        chinese: non_blank(existing_zh),
        english: non_blank(existing_en),
    };
    if !field.is_complete() {
        if let Some(text) = fallback {
            field.fill_from(assign(text));
        }
    }
    field
}

/// Fill sides in candidate order, stopping once both are set.
pub fn assign_from_priority_list<'a, I>(candidates: I) -> BilingualField
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut field = BilingualField::default();
    for candidate in candidates.into_iter().flatten() {
        if field.is_complete() {
            break;
        }
        field.fill_from(assign(candidate));
    }
    field
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

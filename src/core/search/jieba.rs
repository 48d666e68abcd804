//! Jieba Analyzer
//!
//! Full [`TextAnalyzer`] backend: jieba segmentation, tagging and TF-IDF
//! keywords, pinyin transliteration and zhconv script conversion.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use jieba_rs::{Jieba, KeywordExtract, TfIdf, TokenizeMode};
use pinyin::ToPinyin;
use zhconv::{zhconv, Variant};

use super::analyzer::{CustomWord, OffsetToken, Result, TaggedTerm, TextAnalyzer};
use super::tokens::is_chinese;

/// Dictionary plus the runtime words layered on top of it.
struct Dictionary {
    jieba: Jieba,
    custom: IndexMap<String, CustomWord>,
}

impl Dictionary {
    fn add(&mut self, word: &CustomWord) {
        self.jieba
            .add_word(&word.word, word.freq, word.tag.as_deref());
    }
}

pub struct JiebaAnalyzer {
    dictionary: RwLock<Dictionary>,
    tfidf: TfIdf,
}

impl JiebaAnalyzer {
    /// Loads the bundled dictionary; takes a noticeable moment, build once.
    pub fn new() -> Self {
        let jieba = Jieba::new();
        log::info!("Loaded jieba dictionary");
        Self {
            dictionary: RwLock::new(Dictionary {
                jieba,
                custom: IndexMap::new(),
            }),
            tfidf: TfIdf::default(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Dictionary> {
        self.dictionary.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Dictionary> {
        self.dictionary.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for JiebaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JiebaAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaAnalyzer").finish_non_exhaustive()
    }
}

impl TextAnalyzer for JiebaAnalyzer {
    fn name(&self) -> &'static str {
        "jieba"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .read()
            .jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn index_segment(&self, text: &str) -> Result<Vec<OffsetToken>> {
        Ok(self
            .read()
            .jieba
            .tokenize(text, TokenizeMode::Search, true)
            .into_iter()
            .filter(|t| !t.word.trim().is_empty())
            .map(|t| OffsetToken::new(t.word, t.start, t.end))
            .collect())
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedTerm>> {
        Ok(self
            .read()
            .jieba
            .tag(text, true)
            .into_iter()
            .map(|t| TaggedTerm::new(t.word, t.tag))
            .collect())
    }

    fn keywords(&self, text: &str, top_k: usize) -> Result<Vec<String>> {
        Ok(self
            .tfidf
            .extract_keywords(&self.read().jieba, text, top_k, Vec::new())
            .into_iter()
            .map(|k| k.keyword)
            .collect())
    }

    fn to_pinyin(&self, text: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        let mut word = String::new();
        for c in text.chars() {
            if is_chinese(c) {
                if !word.is_empty() {
                    out.push(std::mem::take(&mut word));
                }
                match c.to_pinyin() {
                    Some(p) => out.push(p.plain().to_string()),
                    None => out.push(c.to_string()),
                }
            } else if c.is_whitespace() {
                if !word.is_empty() {
                    out.push(std::mem::take(&mut word));
                }
            } else {
                word.push(c);
            }
        }
        if !word.is_empty() {
            out.push(word);
        }
        Ok(out)
    }

    fn to_pinyin_initials(&self, text: &str) -> Result<String> {
        Ok(text
            .chars()
            .filter_map(|c| match c.to_pinyin() {
                Some(p) => Some(p.first_letter().to_string()),
                None if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase().to_string()),
                None => None,
            })
            .collect())
    }

    fn to_traditional(&self, text: &str) -> Result<String> {
        Ok(zhconv(text, Variant::ZhHant))
    }

    fn to_simplified(&self, text: &str) -> Result<String> {
        Ok(zhconv(text, Variant::ZhHans))
    }

    fn add_custom_word(&self, word: &CustomWord) -> Result<()> {
        let mut dictionary = self.write();
        dictionary.add(word);
        dictionary.custom.insert(word.word.clone(), word.clone());
        Ok(())
    }

    /// jieba has no removal, so the dictionary is rebuilt without the word.
    fn remove_custom_word(&self, word: &str) -> Result<bool> {
        let mut dictionary = self.write();
        if dictionary.custom.shift_remove(word).is_none() {
            return Ok(false);
        }
        let mut rebuilt = Jieba::new();
        for custom in dictionary.custom.values() {
            rebuilt.add_word(&custom.word, custom.freq, custom.tag.as_deref());
        }
        dictionary.jieba = rebuilt;
        log::info!(
            "Rebuilt jieba dictionary with {} custom words",
            dictionary.custom.len()
        );
        Ok(true)
    }
}

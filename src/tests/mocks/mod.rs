//! Mock implementations for testing
//!
//! mockall doubles for the external text-analysis capability, plus a
//! hand-written analyzer that panics on demand.

#![allow(dead_code)]

use mockall::mock;

use crate::core::search::analyzer::{
    AnalyzerError, CustomWord, OffsetToken, TaggedTerm, TextAnalyzer,
};

// ============================================================================
// Text Analyzer Mock
// ============================================================================

mock! {
    pub Analyzer {}

    impl TextAnalyzer for Analyzer {
        fn name(&self) -> &'static str;
        fn segment(&self, text: &str) -> Result<Vec<String>, AnalyzerError>;
        fn index_segment(&self, text: &str) -> Result<Vec<OffsetToken>, AnalyzerError>;
        fn tag(&self, text: &str) -> Result<Vec<TaggedTerm>, AnalyzerError>;
        fn keywords(&self, text: &str, top_k: usize) -> Result<Vec<String>, AnalyzerError>;
        fn to_pinyin(&self, text: &str) -> Result<Vec<String>, AnalyzerError>;
        fn to_pinyin_initials(&self, text: &str) -> Result<String, AnalyzerError>;
        fn to_traditional(&self, text: &str) -> Result<String, AnalyzerError>;
        fn to_simplified(&self, text: &str) -> Result<String, AnalyzerError>;
        fn add_custom_word(&self, word: &CustomWord) -> Result<(), AnalyzerError>;
        fn remove_custom_word(&self, word: &str) -> Result<bool, AnalyzerError>;
    }
}

/// Part-of-speech tag for the scripted vocabulary.
pub fn scripted_tag(word: &str) -> &'static str {
    match word {
        "北京" | "东城区" | "王府井" => "ns",
        "希尔顿酒店" | "香格里拉" => "nz",
        "国贸集团" => "nt",
        "张三" => "nr",
        "万豪" => "nb",
        _ => "n",
    }
}

/// Analyzer whose words are the space-separated parts of its input.
pub fn scripted_analyzer() -> MockAnalyzer {
    let mut mock = MockAnalyzer::new();
    mock.expect_name().return_const("scripted");
    mock.expect_segment()
        .returning(|text| Ok(text.split(' ').map(String::from).collect()));
    mock.expect_index_segment().returning(|text| {
        let mut begin = 0;
        Ok(text
            .split(' ')
            .map(|word| {
                let len = word.chars().count();
                let token = OffsetToken::new(word, begin, begin + len);
                begin += len + 1;
                token
            })
            .collect())
    });
    mock.expect_tag().returning(|text| {
        Ok(text
            .split(' ')
            .map(|w| TaggedTerm::new(w, scripted_tag(w)))
            .collect())
    });
    mock.expect_keywords()
        .returning(|text, k| Ok(text.split(' ').take(k).map(String::from).collect()));
    mock.expect_to_pinyin()
        .returning(|_| Ok(vec!["bei".to_string(), "jing".to_string()]));
    mock.expect_to_pinyin_initials()
        .returning(|_| Ok("bj".to_string()));
    mock.expect_to_traditional()
        .returning(|text| Ok(text.replace('饭', "飯").replace('东', "東")));
    mock.expect_to_simplified()
        .returning(|text| Ok(text.replace('飯', "饭").replace('東', "东")));
    mock
}

/// Analyzer where every capability is down.
pub fn failing_analyzer() -> MockAnalyzer {
    let down = || AnalyzerError::Backend("service unavailable".to_string());
    let mut mock = MockAnalyzer::new();
    mock.expect_name().return_const("down");
    mock.expect_segment().returning(move |_| Err(down()));
    mock.expect_index_segment().returning(move |_| Err(down()));
    mock.expect_tag().returning(move |_| Err(down()));
    mock.expect_keywords().returning(move |_, _| Err(down()));
    mock.expect_to_pinyin().returning(move |_| Err(down()));
    mock.expect_to_pinyin_initials().returning(move |_| Err(down()));
    mock.expect_to_traditional().returning(move |_| Err(down()));
    mock.expect_to_simplified().returning(move |_| Err(down()));
    mock.expect_add_custom_word().returning(move |_| Err(down()));
    mock.expect_remove_custom_word().returning(move |_| Err(down()));
    mock
}

// ============================================================================
// Panicking Analyzer
// ============================================================================

/// Segments on whitespace but panics on any text containing `trigger`.
#[derive(Debug, Clone)]
pub struct PanickingAnalyzer {
    pub trigger: &'static str,
}

impl PanickingAnalyzer {
    fn check(&self, text: &str) {
        if text.contains(self.trigger) {
            panic!("analyzer crashed on {:?}", text);
        }
    }
}

impl TextAnalyzer for PanickingAnalyzer {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        self.check(text);
        Ok(text.split_whitespace().map(String::from).collect())
    }

    fn index_segment(&self, text: &str) -> Result<Vec<OffsetToken>, AnalyzerError> {
        self.check(text);
        Err(AnalyzerError::Unsupported("offsets"))
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedTerm>, AnalyzerError> {
        self.check(text);
        Err(AnalyzerError::Unsupported("tagging"))
    }

    fn keywords(&self, text: &str, _top_k: usize) -> Result<Vec<String>, AnalyzerError> {
        self.check(text);
        Err(AnalyzerError::Unsupported("keywords"))
    }

    fn to_pinyin(&self, _text: &str) -> Result<Vec<String>, AnalyzerError> {
        Err(AnalyzerError::Unsupported("pinyin"))
    }

    fn to_pinyin_initials(&self, _text: &str) -> Result<String, AnalyzerError> {
        Err(AnalyzerError::Unsupported("pinyin initials"))
    }

    fn to_traditional(&self, _text: &str) -> Result<String, AnalyzerError> {
        Err(AnalyzerError::Unsupported("traditional"))
    }

    fn to_simplified(&self, _text: &str) -> Result<String, AnalyzerError> {
        Err(AnalyzerError::Unsupported("simplified"))
    }
}

pub mod geography;
pub mod language;
pub mod logging;
pub mod normalize;
pub mod record;

// Spelling correction applied before segmentation
pub mod preprocess;

// Tokenization, keywords, entities and transliteration for index fields
pub mod search;

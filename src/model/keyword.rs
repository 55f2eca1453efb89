/// One `English word | Chinese translation` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub word: String,
    pub translation: String,
}

use crate::common::*;

#[doc = r#"
    A decoded CSV dataset: the typed rows next to the raw text they were
    parsed from. The raw text is kept because the presentation layer serves
    it back to the user as a downloadable file.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DatasetTable<R> {
    pub raw_csv: String,
    pub rows: Vec<R>,
}

//! Splitting of text rows into fields
//!
//! Both the variant reader and the missingness report reader go through
//! [`RowSplitter`] so that delimiter and empty field handling is the same
//! everywhere.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyFields {
    /// Empty fields are kept, so field positions match column positions
    Keep,
    /// Empty fields (runs of delimiters) are dropped
    Skip,
}

#[derive(Debug, Clone, Copy)]
pub struct RowSplitter {
    delim: char,
    empty: EmptyFields,
}

impl RowSplitter {
    pub const fn new(delim: char, empty: EmptyFields) -> Self {
        Self { delim, empty }
    }

    /// Tab separated columns (VCF style)
    pub const fn tab_separated() -> Self {
        Self::new('\t', EmptyFields::Keep)
    }

    /// Columns aligned with runs of spaces (PLINK report style)
    pub const fn space_padded() -> Self {
        Self::new(' ', EmptyFields::Skip)
    }

    pub fn split<'a>(&self, row: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let keep = self.empty == EmptyFields::Keep;
        row.split(self.delim).filter(move |s| keep || !s.is_empty())
    }

    pub fn fields<'a>(&self, row: &'a str) -> Vec<&'a str> {
        self.split(row).collect()
    }
}

use std::{fmt::Write as FmtWrite, io::BufRead, path::Path};

use crate::{error::PedError, naming::SampleIds, tokens::RowSplitter};

/// Fixed (non genotype) fields written for every sample
///
/// Sex and phenotype are not read from the data; every record of a run
/// gets the same codes.
#[derive(Debug, Clone)]
pub struct Demographics {
    pub family_id: Box<str>,
    pub paternal_id: Box<str>,
    pub maternal_id: Box<str>,
    pub sex: u8,
    pub phenotype: Box<str>,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            family_id: Box::from("0"),
            paternal_id: Box::from("."),
            maternal_id: Box::from("."),
            sex: 1,
            phenotype: Box::from("1"),
        }
    }
}

/// Zero based indices of the two genotype columns taken from each variant line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenotypeColumns {
    first: usize,
    second: usize,
}

impl Default for GenotypeColumns {
    fn default() -> Self {
        Self {
            first: 10,
            second: 11,
        }
    }
}

impl GenotypeColumns {
    pub fn new(first: usize, second: usize) -> anyhow::Result<Self> {
        if first == second {
            Err(anyhow!(
                "Genotype columns must be distinct (both set to {})",
                first
            ))
        } else {
            Ok(Self { first, second })
        }
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn second(&self) -> usize {
        self.second
    }

    /// Minimum number of fields a variant line must have
    pub fn min_fields(&self) -> usize {
        self.first.max(self.second) + 1
    }
}

/// One complete PED line (without the terminating newline)
#[derive(Debug)]
pub struct PedigreeRecord {
    line: String,
    n_pairs: usize,
    n_skipped: usize,
}

impl PedigreeRecord {
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Number of genotype pairs (= number of variant data lines)
    pub fn n_pairs(&self) -> usize {
        self.n_pairs
    }

    /// Number of header lines skipped in the source file
    pub fn n_skipped(&self) -> usize {
        self.n_skipped
    }
}

fn is_header_line(s: &str) -> bool {
    s.starts_with('#') || s.starts_with("CHROM")
}

/// Build the PED record for one variant file
///
/// The record is assembled in memory and only returned once the whole file
/// has been read, so a malformed line never produces a truncated record.
/// `path` is only used for diagnostics.
pub fn read_pedigree_record<R: BufRead>(
    mut rdr: R,
    path: &Path,
    ids: &SampleIds,
    demog: &Demographics,
    cols: GenotypeColumns,
) -> Result<PedigreeRecord, PedError> {
    let splitter = RowSplitter::tab_separated();
    let min_fields = cols.min_fields();

    let mut line = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        line,
        "{}\t{}\t{}\t{}\t{}\t{}",
        ids.fid, ids.iid, demog.paternal_id, demog.maternal_id, demog.sex, demog.phenotype
    );

    let mut buf = String::new();
    let mut line_no = 0;
    let mut n_pairs = 0;
    let mut n_skipped = 0;
    loop {
        if rdr.read_line(&mut buf).map_err(|e| PedError::io(path, e))? == 0 {
            break;
        }
        line_no += 1;
        if is_header_line(&buf) {
            n_skipped += 1;
        } else {
            // Only the line terminator is removed; any other whitespace is part of the field
            let row = buf.strip_suffix('\n').unwrap_or(&buf);
            let fields = splitter.fields(row);
            if fields.len() < min_fields {
                return Err(PedError::MalformedRecord {
                    path: path.to_owned(),
                    line: line_no,
                    found: fields.len(),
                    expected: min_fields,
                });
            }
            line.push('\t');
            line.push_str(fields[cols.first()]);
            line.push('\t');
            line.push_str(fields[cols.second()]);
            n_pairs += 1;
        }
        buf.clear();
    }
    trace!(
        "{}: {} genotype pairs, {} header lines",
        path.display(),
        n_pairs,
        n_skipped
    );
    Ok(PedigreeRecord {
        line,
        n_pairs,
        n_skipped,
    })
}

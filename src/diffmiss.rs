use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use compress_io::compress::CompressIo;

use crate::{cli::QcConfig, error::PedError, output::OutputFile, tokens::RowSplitter};

/// Markers with a differential missingness P value strictly below this fail QC
pub const DIFFMISS_THRESHOLD: f64 = 0.0002;

/// Location of the fail list relative to the master directory
pub const FAIL_LIST_PATH: &str = "FAILS/fail-diffmiss-qc.txt";

const MARKER_COL: usize = 1;
const P_COL: usize = 4;

/// Markers failing QC, in report order (duplicates kept)
#[derive(Debug, Default)]
pub struct FailList {
    markers: Vec<Box<str>>,
    n_rows: usize,
    n_headers: usize,
}

impl FailList {
    pub fn markers(&self) -> &[Box<str>] {
        &self.markers
    }

    /// Data rows examined
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_headers(&self) -> usize {
        self.n_headers
    }
}

#[derive(Debug)]
pub struct QcSummary {
    pub n_rows: usize,
    pub n_headers: usize,
    pub n_failed: usize,
    pub output: PathBuf,
}

fn is_header_row(tok: &str) -> bool {
    tok.eq_ignore_ascii_case("CHR")
}

/// Scan a differential missingness report and collect failing markers
///
/// Columns are separated by runs of spaces. Rows whose first column is
/// `CHR` (any case) are headers. The marker ID is taken from column 2 and the
/// P value from column 5; a P value that is missing or not a number aborts
/// the scan. `path` is only used for diagnostics.
pub fn scan_report<R: BufRead>(
    mut rdr: R,
    path: &Path,
    threshold: f64,
) -> Result<FailList, PedError> {
    let splitter = RowSplitter::space_padded();
    let mut fails = FailList::default();
    let mut buf = String::new();
    let mut line = 0;
    loop {
        if rdr.read_line(&mut buf).map_err(|e| PedError::io(path, e))? == 0 {
            break;
        }
        line += 1;
        let fields = splitter.fields(buf.trim_end());
        match fields.first() {
            None => warn!("Skipping blank line {} of {}", line, path.display()),
            Some(s) if is_header_row(s) => fails.n_headers += 1,
            Some(_) => {
                let malformed = |detail: String| PedError::MalformedRow {
                    path: path.to_owned(),
                    line,
                    detail,
                };
                if fields.len() <= P_COL {
                    return Err(malformed(format!(
                        "expected at least {} columns, found {}",
                        P_COL + 1,
                        fields.len()
                    )));
                }
                let p = fields[P_COL].parse::<f64>().map_err(|e| {
                    malformed(format!(
                        "could not parse P value '{}' from column {}: {}",
                        fields[P_COL],
                        P_COL + 1,
                        e
                    ))
                })?;
                fails.n_rows += 1;
                if p < threshold {
                    trace!("{} fails QC (P = {})", fields[MARKER_COL], p);
                    fails.markers.push(Box::from(fields[MARKER_COL]));
                }
            }
        }
        buf.clear();
    }
    Ok(fails)
}

/// Run differential missingness QC and write the fail list
pub fn run_diffmiss(cfg: &QcConfig) -> anyhow::Result<QcSummary> {
    let input = cfg.input();
    let rdr = CompressIo::new()
        .path(input)
        .bufreader()
        .map_err(|e| PedError::io(input, e))?;
    debug!("Opened {} for input", input.display());

    let fails = scan_report(rdr, input, cfg.threshold())?;
    debug!(
        "{} data rows, {} header rows read from {}",
        fails.n_rows(),
        fails.n_headers(),
        input.display()
    );

    let mut out = OutputFile::create(cfg.output())?;
    for m in fails.markers() {
        out.write_line(m)?;
    }
    let output = out.commit()?;
    Ok(QcSummary {
        n_rows: fails.n_rows(),
        n_headers: fails.n_headers(),
        n_failed: fails.markers().len(),
        output,
    })
}

use std::{
    io,
    path::{Path, PathBuf},
};

use compress_io::compress::CompressIo;
use walkdir::WalkDir;

use crate::{
    cli::{ConvertConfig, InputSource},
    error::PedError,
    output::OutputFile,
    pedigree::read_pedigree_record,
};

#[derive(Debug)]
pub struct ConversionSummary {
    pub n_records: usize,
    pub n_pairs: usize,
    pub output: PathBuf,
}

/// True for a visible file name ending in `.ext` (`ext` may contain dots, e.g. `vcf.gz`)
fn has_extension(name: &str, ext: &str) -> bool {
    !name.starts_with('.')
        && name
            .strip_suffix(ext)
            .and_then(|stem| stem.strip_suffix('.'))
            .map(|stem| !stem.is_empty())
            .unwrap_or(false)
}

/// Regular files directly inside `dir` with extension `ext`, sorted by file name
///
/// A leading '.' on `ext` is ignored. Hidden files are skipped.
pub fn collect_inputs(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, PedError> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    let mut v = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_owned();
            PedError::io(path, io::Error::from(e))
        })?;
        if entry.file_type().is_file() && has_extension(&entry.file_name().to_string_lossy(), ext) {
            v.push(entry.into_path())
        }
    }
    if v.is_empty() {
        Err(PedError::NoInputFilesFound {
            location: dir.to_owned(),
        })
    } else {
        Ok(v)
    }
}

fn resolve_inputs(src: &InputSource) -> Result<Vec<PathBuf>, PedError> {
    match src {
        InputSource::Directory { dir, extension } => collect_inputs(dir, extension),
        InputSource::Files(v) if v.is_empty() => Err(PedError::NoInputFilesFound {
            location: PathBuf::from("command line"),
        }),
        InputSource::Files(v) => Ok(v.clone()),
    }
}

/// Convert every input VCF into one PED record and write them to the output file
///
/// The output only appears once every input has been converted; any error
/// leaves no output behind.
pub fn run_convert(cfg: &ConvertConfig) -> anyhow::Result<ConversionSummary> {
    let inputs = resolve_inputs(cfg.input())?;
    info!("Found {} VCF file(s) to convert", inputs.len());

    let mut out = OutputFile::create(cfg.output())?;
    let mut n_pairs = None;
    let mut total_pairs = 0;
    for path in inputs.iter() {
        info!("Converting {}", path.display());
        let rdr = CompressIo::new()
            .path(path)
            .bufreader()
            .map_err(|e| PedError::io(path, e))?;
        let ids = cfg.id_mode().sample_ids(path, &cfg.demographics().family_id);
        let rec = read_pedigree_record(
            rdr,
            path,
            &ids,
            cfg.demographics(),
            cfg.genotype_columns(),
        )?;
        debug!(
            "{}: IID {}, {} genotype pairs, {} header lines skipped",
            path.display(),
            ids.iid,
            rec.n_pairs(),
            rec.n_skipped()
        );
        match n_pairs {
            None => n_pairs = Some(rec.n_pairs()),
            Some(n) if n != rec.n_pairs() => warn!(
                "{} has {} variant lines, previous files had {}",
                path.display(),
                rec.n_pairs(),
                n
            ),
            _ => (),
        }
        total_pairs += rec.n_pairs();
        out.write_line(rec.as_str())?;
    }
    let output = out.commit()?;
    Ok(ConversionSummary {
        n_records: inputs.len(),
        n_pairs: total_pairs,
        output,
    })
}

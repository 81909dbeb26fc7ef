use std::path::{Path, PathBuf};

use crate::{
    diffmiss::DIFFMISS_THRESHOLD,
    naming::IdMode,
    pedigree::{Demographics, GenotypeColumns},
};

mod getters;
mod mk_config;

/// Where the variant files for a conversion come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// All regular files in `dir` with the given extension, sorted by name
    Directory { dir: PathBuf, extension: Box<str> },
    /// Files listed explicitly, used in the order given
    Files(Vec<PathBuf>),
}

pub struct ConvertConfig {
    input: InputSource,
    output: PathBuf,
    id_mode: IdMode,
    demographics: Demographics,
    genotype_columns: GenotypeColumns,
}

pub struct QcConfig {
    input: PathBuf,
    master_dir: PathBuf,
    threshold: f64,
}

impl ConvertConfig {
    pub fn new(
        input: InputSource,
        output: PathBuf,
        id_mode: IdMode,
        demographics: Demographics,
        genotype_columns: GenotypeColumns,
    ) -> Self {
        Self {
            input,
            output,
            id_mode,
            demographics,
            genotype_columns,
        }
    }
}

impl QcConfig {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input: P, master_dir: Q) -> Self {
        Self {
            input: input.as_ref().to_owned(),
            master_dir: master_dir.as_ref().to_owned(),
            threshold: DIFFMISS_THRESHOLD,
        }
    }
}

use std::path::{Path, PathBuf};

use super::{ConvertConfig, InputSource, QcConfig};
use crate::{
    diffmiss::FAIL_LIST_PATH,
    naming::IdMode,
    pedigree::{Demographics, GenotypeColumns},
};

impl ConvertConfig {
    pub fn input(&self) -> &InputSource {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn id_mode(&self) -> IdMode {
        self.id_mode
    }

    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn genotype_columns(&self) -> GenotypeColumns {
        self.genotype_columns
    }
}

impl QcConfig {
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Fail list location under the master directory
    pub fn output(&self) -> PathBuf {
        self.master_dir.join(FAIL_LIST_PATH)
    }
}

use std::{fmt, path::Path};

use clap::{builder::PossibleValue, ValueEnum};

/// How family and individual IDs are derived from a variant file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMode {
    /// FID is a fixed family ID, IID is the sample token
    Single,
    /// FID and IID are both the sample token
    Paired,
}

impl ValueEnum for IdMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Single, Self::Paired]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Single => Some(PossibleValue::new("single").help("FID fixed, IID from file name")),
            Self::Paired => Some(PossibleValue::new("paired").help("FID and IID from file name")),
        }
    }
}

impl fmt::Display for IdMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Paired => write!(f, "paired"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleIds {
    pub fid: Box<str>,
    pub iid: Box<str>,
}

impl IdMode {
    pub fn sample_ids<P: AsRef<Path>>(&self, path: P, family_id: &str) -> SampleIds {
        let token = sample_token(path);
        let fid = match self {
            Self::Single => Box::from(family_id),
            Self::Paired => token.clone(),
        };
        SampleIds { fid, iid: token }
    }
}

/// Sample token from a file name: everything in the base name before the first '_'
///
/// A name without an underscore is returned whole, extension included.
pub fn sample_token<P: AsRef<Path>>(path: P) -> Box<str> {
    let path = path.as_ref();
    let base = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    Box::from(base.split('_').next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_before_underscore() {
        assert_eq!(&*sample_token("Data/VCF/sample1_foo_bar.vcf"), "sample1");
        assert_eq!(&*sample_token("/abs/dir_with_underscore/S22_x.vcf"), "S22");
        assert_eq!(&*sample_token("plain.vcf"), "plain.vcf");
        assert_eq!(&*sample_token("_lead.vcf"), "");
    }

    #[test]
    fn modes() {
        let p = "in/NA12878_chr1.vcf";
        assert_eq!(
            IdMode::Single.sample_ids(p, "0"),
            SampleIds {
                fid: Box::from("0"),
                iid: Box::from("NA12878")
            }
        );
        let ids = IdMode::Paired.sample_ids(p, "0");
        assert_eq!(&*ids.fid, "NA12878");
        assert_eq!(&*ids.iid, "NA12878");
    }
}

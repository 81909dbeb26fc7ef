use std::path::PathBuf;

use clap::ArgMatches;

use crate::{
    naming::IdMode,
    pedigree::{Demographics, GenotypeColumns},
};

use super::{ConvertConfig, InputSource, QcConfig};

fn get_str(m: &ArgMatches, id: &str) -> anyhow::Result<Box<str>> {
    m.try_get_one::<String>(id)?
        .map(|s| Box::from(s.as_str()))
        .ok_or_else(|| anyhow!("Missing value for {}", id))
}

impl ConvertConfig {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let extension = get_str(m, "extension")?;
        let output = m.try_get_one::<PathBuf>("output")?.cloned();

        let (input, output) = if let Some(dir) = m.try_get_one::<PathBuf>("project_dir")? {
            let input = InputSource::Directory {
                dir: dir.join("Data").join("VCF"),
                extension,
            };
            let output = output.unwrap_or_else(|| dir.join("Data").join("PLINK").join("case.ped"));
            (input, output)
        } else {
            let output = output.ok_or_else(|| anyhow!("No output file given"))?;
            let input = if let Some(dir) = m.try_get_one::<PathBuf>("input_dir")? {
                InputSource::Directory {
                    dir: dir.clone(),
                    extension,
                }
            } else {
                let files: Vec<_> = m
                    .try_get_many::<PathBuf>("files")?
                    .map(|v| v.cloned().collect())
                    .unwrap_or_default();
                InputSource::Files(files)
            };
            (input, output)
        };

        let id_mode = *m
            .try_get_one::<IdMode>("id_mode")?
            .expect("Missing default id mode");

        let demographics = Demographics {
            family_id: get_str(m, "family_id")?,
            paternal_id: get_str(m, "paternal_id")?,
            maternal_id: get_str(m, "maternal_id")?,
            sex: *m.try_get_one::<u8>("sex")?.expect("Missing default sex code"),
            phenotype: get_str(m, "phenotype")?,
        };

        let cols: [usize; 2] = m
            .try_get_many::<usize>("genotype_columns")?
            .expect("Missing genotype_columns")
            .copied()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|v: Vec<usize>| anyhow!("Expected two genotype columns, got {}", v.len()))?;
        let genotype_columns = GenotypeColumns::new(cols[0], cols[1])?;

        debug!("Conversion input: {:?}", input);
        debug!("Conversion output: {}", output.display());
        debug!(
            "ID mode: {}, demographics: {:?}, genotype columns: {}, {}",
            id_mode,
            demographics,
            genotype_columns.first(),
            genotype_columns.second()
        );

        Ok(Self::new(input, output, id_mode, demographics, genotype_columns))
    }
}

impl QcConfig {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let input = m
            .try_get_one::<PathBuf>("input")?
            .cloned()
            .expect("Missing input"); // Should be enforced by clap
        let master_dir = m
            .try_get_one::<PathBuf>("master_dir")?
            .cloned()
            .expect("Missing master directory"); // Should be enforced by clap

        debug!(
            "Differential missingness report: {}, master directory: {}",
            input.display(),
            master_dir.display()
        );

        Ok(Self::new(input, master_dir))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::cli::cli_model::cli_model;

    fn convert_cfg(args: &[&str]) -> anyhow::Result<ConvertConfig> {
        let argv = ["pedqc", "convert"].iter().chain(args.iter()).copied();
        let m = cli_model().try_get_matches_from(argv)?;
        let (_, sm) = m.subcommand().expect("Missing sub-command");
        ConvertConfig::from_matches(sm)
    }

    fn input_dir(cfg: &ConvertConfig) -> (&Path, &str) {
        match cfg.input() {
            InputSource::Directory { dir, extension } => (dir.as_path(), &**extension),
            InputSource::Files(_) => panic!("Expected directory input"),
        }
    }

    #[test]
    fn project_dir_convention() {
        let cfg = convert_cfg(&["-d", "proj"]).unwrap();
        let (dir, ext) = input_dir(&cfg);
        assert_eq!(dir, Path::new("proj/Data/VCF"));
        assert_eq!(ext, "vcf");
        assert_eq!(cfg.output(), Path::new("proj/Data/PLINK/case.ped"));
        assert_eq!(cfg.id_mode(), IdMode::Single);
        assert_eq!(cfg.genotype_columns(), GenotypeColumns::default());

        let d = cfg.demographics();
        assert_eq!(&*d.family_id, "0");
        assert_eq!(&*d.paternal_id, ".");
        assert_eq!(&*d.maternal_id, ".");
        assert_eq!(d.sex, 1);
        assert_eq!(&*d.phenotype, "1");
    }

    #[test]
    fn project_dir_with_output() {
        let cfg = convert_cfg(&["-d", "proj", "-o", "elsewhere/all.ped"]).unwrap();
        assert_eq!(cfg.output(), Path::new("elsewhere/all.ped"));
    }

    #[test]
    fn input_dir_and_sample_fields() {
        let cfg = convert_cfg(&[
            "-i",
            "vcfs",
            "-x",
            "vcf.gz",
            "-o",
            "out.ped",
            "--id-mode",
            "paired",
            "--family-id",
            "FAM1",
            "--paternal-id",
            "0",
            "--maternal-id",
            "0",
            "--sex",
            "2",
            "--phenotype",
            "-9",
        ])
        .unwrap();
        let (dir, ext) = input_dir(&cfg);
        assert_eq!(dir, Path::new("vcfs"));
        assert_eq!(ext, "vcf.gz");
        assert_eq!(cfg.output(), Path::new("out.ped"));
        assert_eq!(cfg.id_mode(), IdMode::Paired);

        let d = cfg.demographics();
        assert_eq!(&*d.family_id, "FAM1");
        assert_eq!(&*d.paternal_id, "0");
        assert_eq!(&*d.maternal_id, "0");
        assert_eq!(d.sex, 2);
        assert_eq!(&*d.phenotype, "-9");
    }

    #[test]
    fn explicit_files() {
        let cfg = convert_cfg(&["-o", "out.ped", "b_1.vcf", "a_1.vcf"]).unwrap();
        match cfg.input() {
            InputSource::Files(v) => {
                assert_eq!(v, &vec![PathBuf::from("b_1.vcf"), PathBuf::from("a_1.vcf")])
            }
            InputSource::Directory { .. } => panic!("Expected explicit files"),
        }
    }

    #[test]
    fn genotype_column_pair() {
        let cfg = convert_cfg(&["-d", "proj", "--genotype-columns", "9,10"]).unwrap();
        assert_eq!(cfg.genotype_columns().first(), 9);
        assert_eq!(cfg.genotype_columns().second(), 10);
        assert_eq!(cfg.genotype_columns().min_fields(), 11);

        assert!(convert_cfg(&["-d", "proj", "--genotype-columns", "9"]).is_err());
        assert!(convert_cfg(&["-d", "proj", "--genotype-columns", "9,10,11"]).is_err());
        assert!(convert_cfg(&["-d", "proj", "--genotype-columns", "4,4"]).is_err());
    }

    #[test]
    fn qc_config() {
        let m = cli_model()
            .try_get_matches_from([
                "pedqc",
                "diffmiss",
                "--input",
                "x.missing",
                "--master-directory",
                "proj",
            ])
            .unwrap();
        let (_, sm) = m.subcommand().unwrap();
        let cfg = QcConfig::from_matches(sm).unwrap();
        assert_eq!(cfg.input(), Path::new("x.missing"));
        assert_eq!(cfg.output(), Path::new("proj/FAILS/fail-diffmiss-qc.txt"));
        assert_eq!(cfg.threshold(), 0.0002);
    }
}

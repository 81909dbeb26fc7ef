use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::{log_utils::LogLevel, naming::IdMode};

fn convert_model() -> Command {
    Command::new("convert")
        .about("Combine per-sample VCF files into a single PED file")
        .next_help_heading("Input/Output")
        .arg(
            Arg::new("project_dir")
                .short('d')
                .long("project-dir")
                .value_parser(value_parser!(PathBuf))
                .value_name("DIR")
                .help("Project directory (reads DIR/Data/VCF/*.vcf, writes DIR/Data/PLINK/case.ped)"),
        )
        .arg(
            Arg::new("input_dir")
                .short('i')
                .long("input-dir")
                .value_parser(value_parser!(PathBuf))
                .value_name("DIR")
                .help("Directory with VCF files"),
        )
        .arg(
            Arg::new("files")
                .num_args(1..)
                .value_parser(value_parser!(PathBuf))
                .value_name("VCF")
                .help("Input VCF file(s)"),
        )
        .group(
            ArgGroup::new("source")
                .args(["project_dir", "input_dir", "files"])
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("project_dir")
                .value_name("PED")
                .help("Output PED file"),
        )
        .arg(
            Arg::new("extension")
                .short('x')
                .long("extension")
                .value_parser(value_parser!(String))
                .default_value("vcf")
                .value_name("EXT")
                .help("Extension of VCF files when reading a directory"),
        )
        .next_help_heading("Sample fields")
        .arg(
            Arg::new("id_mode")
                .short('m')
                .long("id-mode")
                .value_parser(value_parser!(IdMode))
                .ignore_case(true)
                .default_value("single")
                .value_name("MODE")
                .help("How FID and IID are derived from the file name"),
        )
        .arg(
            Arg::new("family_id")
                .long("family-id")
                .value_parser(value_parser!(String))
                .default_value("0")
                .value_name("FID")
                .help("Family ID used in single mode"),
        )
        .arg(
            Arg::new("paternal_id")
                .long("paternal-id")
                .value_parser(value_parser!(String))
                .default_value(".")
                .value_name("ID")
                .help("Paternal ID"),
        )
        .arg(
            Arg::new("maternal_id")
                .long("maternal-id")
                .value_parser(value_parser!(String))
                .default_value(".")
                .value_name("ID")
                .help("Maternal ID"),
        )
        .arg(
            Arg::new("sex")
                .long("sex")
                .value_parser(value_parser!(u8).range(0..=2))
                .default_value("1")
                .value_name("CODE")
                .help("Sex code (1 male, 2 female, 0 unknown)"),
        )
        .arg(
            Arg::new("phenotype")
                .long("phenotype")
                .value_parser(value_parser!(String))
                .allow_hyphen_values(true)
                .default_value("1")
                .value_name("CODE")
                .help("Phenotype code"),
        )
        .arg(
            Arg::new("genotype_columns")
                .long("genotype-columns")
                .num_args(1)
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .default_value("10,11")
                .value_name("COL1,COL2")
                .help("Zero based indices of the two genotype columns in each VCF line"),
        )
}

fn diffmiss_model() -> Command {
    Command::new("diffmiss")
        .about("List markers failing the differential missingness test")
        .arg(
            Arg::new("input")
                .long("input")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .value_name("MISSING file")
                .help("Differential missingness report (.missing)"),
        )
        .arg(
            Arg::new("master_dir")
                .long("master-directory")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .value_name("DIR")
                .help("Master directory (fail list is written to DIR/FAILS/fail-diffmiss-qc.txt)"),
        )
}

pub(super) fn cli_model() -> Command {
    command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("info")
                .help("Set log level"),
        )
        .arg(
            Arg::new("timestamp")
                .long("timestamp")
                .action(ArgAction::SetTrue)
                .help("Prefix log messages with a timestamp"),
        )
        .subcommand(convert_model())
        .subcommand(diffmiss_model())
}

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

mod cli;
mod convert;
mod diffmiss;
mod error;
mod log_utils;
mod naming;
mod output;
mod pedigree;
mod tokens;

use cli::Task;

fn main() -> anyhow::Result<()> {
    match cli::handle_cli()? {
        Task::Convert(cfg) => {
            let s = convert::run_convert(&cfg)?;
            info!(
                "Wrote {} PED record(s) with {} genotype pairs in total to {}",
                s.n_records,
                s.n_pairs,
                s.output.display()
            );
        }
        Task::DiffMiss(cfg) => {
            let s = diffmiss::run_diffmiss(&cfg)?;
            info!(
                "{} of {} markers fail differential missingness QC (P < {}, {} header rows skipped); list written to {}",
                s.n_failed,
                s.n_rows,
                cfg.threshold(),
                s.n_headers,
                s.output.display()
            );
        }
    }
    Ok(())
}

use std::fs;

use anyhow::{Context, Result};
use bincover_rs::io::ext_repr::ExtBCInstance;
use clap::Parser;
use csirik::config::CsirikConfig;
use csirik::io::cli::Cli;
use csirik::io::output::BCOutput;
use csirik::{EPOCH, generator, io};
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            CsirikConfig::default()
        }
        Some(config_file) => {
            io::read_json(config_file).context("incorrect config file format")?
        }
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm.into();
    }
    info!("[MAIN] successfully parsed CsirikConfig: {config:?}");

    let ext_instance = match &args.input_file {
        Some(input_file) => io::read_json::<ExtBCInstance>(input_file)?,
        None => {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let instance = generator::generate(config.generator, &mut rng)?;
            info!(
                "[MAIN] generated instance with {} items for bin size {}",
                instance.item_qty(),
                instance.bin_size
            );
            ExtBCInstance {
                name: "generated".to_string(),
                bin_size: instance.bin_size,
                item_sizes: instance.item_sizes,
            }
        }
    };

    let instance = bincover_rs::io::import(&ext_instance)?;
    let solution = config.algorithm.run(&instance)?;
    info!(
        "[MAIN] {:?} covered {} bins ({:.1}% of the total item size)",
        config.algorithm,
        solution.n_covered(),
        solution.covered_ratio(&instance) * 100.0
    );

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let input_stem = args
        .input_file
        .as_deref()
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .unwrap_or("generated");

    let output = BCOutput {
        solution: bincover_rs::io::export(&instance, &solution, *EPOCH),
        instance: ext_instance,
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}

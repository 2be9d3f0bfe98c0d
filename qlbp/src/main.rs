use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use boxpack::io::export::export_solution;
use boxpack::io::import::Importer;
use boxpack::io::svg::{Projection, layout_to_svg};
use clap::Parser as ClapParser;
use log::{info, warn};
use qlbp::config::QLConfig;
use qlbp::io;
use qlbp::io::cli::Cli;
use qlbp::io::output::QLOutput;
use qlbp::opt::QLTrainer;
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            QLConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    config.validate()?;

    info!("[MAIN] Successfully parsed QLConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_items = io::read_input(args.input_file.as_path())?;
    let importer = Importer::new(config.container_dims, config.min_item_separation)?;
    let instance = importer.import_instance(&ext_items)?;
    info!(
        "[MAIN] Imported {} boxes ({:.3}% of the container volume)",
        instance.n_items(),
        instance.total_item_volume() / instance.container.volume() * 100.0
    );

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let sol = QLTrainer::new(instance, config, rng).solve();

    {
        let output = QLOutput {
            solution: export_solution(&sol),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    for projection in Projection::ALL {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}_{projection}.svg"));
        let title = format!("episode {}", sol.episode);
        let svg = layout_to_svg(
            &sol.layout_snapshot,
            projection,
            config.svg_draw_options,
            &title,
        );

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}

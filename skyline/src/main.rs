use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutlist::io::svg::sheet_to_svg;
use cutlist::io::{export, import};
use cutlist::util::SortStrategy;
use log::{info, warn};
use skyline::config::SkylineConfig;
use skyline::io;
use skyline::io::cli::Cli;
use skyline::io::output::NestOutput;
use skyline::{nest, nest_best_of};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SkylineConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed SkylineConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let (parts, nesting_config) = import(&ext_instance, &config.nesting_config)?;
    info!(
        "[MAIN] Instance {} contains {} parts",
        ext_instance.name,
        parts.len()
    );

    let start = Instant::now();
    let result = match config.best_of_strategies || args.best_of {
        true => nest_best_of(&parts, &nesting_config, &SortStrategy::ALL)?,
        false => nest(&parts, &nesting_config)?,
    };
    let run_time = start.elapsed();

    {
        let output = NestOutput {
            solution: export(&result, run_time),
            instance: ext_instance,
            config: SkylineConfig {
                nesting_config,
                ..config
            },
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    for (i, sheet) in result.sheets.iter().enumerate() {
        let svg_path = args.solution_folder.join(format!("sol_{input_stem}_{i}.svg"));
        let svg = sheet_to_svg(sheet, config.svg_draw_options, input_stem);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}

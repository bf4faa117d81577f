use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use romanwords::{
    BatchReport, ProcessingParams, RunReport, process_directory_to_path, process_reader_to_writer,
    write_run_report,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_params(args: &CliArgs) -> Result<ProcessingParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            ProcessingParams::from_json_file(path).map_err(|source| AppError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => ProcessingParams::default(),
    };

    if let Some(format) = args.format {
        params.format = format;
    }
    if args.skip_blank {
        params.skip_blank = true;
    }
    Ok(params)
}

fn process_single_file(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
) -> Result<BatchReport, AppError> {
    let reader = File::open(input).map_err(|source| AppError::UnableToOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| AppError::UnableToOpen {
        path: output.to_path_buf(),
        source,
    })?;

    let report = process_reader_to_writer(BufReader::new(reader), BufWriter::new(writer), params)?;
    info!("Successfully processed: {:?} -> {:?}", input, output);
    Ok(report)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = load_params(&args)?;
    info!("Output format: {}", params.format);
    let batch_mode = args.batch || args.input_dir.is_some();

    let report = if batch_mode {
        let input_dir = args.input_dir.as_deref().ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.as_deref().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        fs::create_dir_all(output_dir)?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(input_dir, output_dir, &params, args.batch)
            .map_err(AppError::from)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Invalid: {}", report.invalid);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);

        println!("Processing complete. Check {} for results.", output_dir.display());
        report
    } else {
        let report = process_single_file(&args.input, &args.output, &params)?;
        println!("Processing complete. Check {} for results.", args.output.display());
        report
    };

    if let Some(path) = &args.report {
        write_run_report(path, &RunReport::new(report, params.format)).map_err(AppError::from)?;
    }

    Ok(())
}

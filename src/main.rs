use std::process::ExitCode;

use exr2tiff::image_pipeline::{ConversionConfig, ExrToTiffPipeline, WriteOutcome};
use exr2tiff::logger;

use tracing::{error, info, warn};

fn main() -> ExitCode {
    logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("exr2tiff");
        eprintln!("Usage: {} input.exr output.tiff", program);
        return ExitCode::FAILURE;
    }

    let pipeline = ExrToTiffPipeline::new(ConversionConfig::default());

    info!("EXR to TIFF pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);

    // The conversion result is reported but does not fail the process;
    // embedders that need a hard failure can match on the library result.
    match pipeline.convert_file(&args[1], &args[2]) {
        Ok(WriteOutcome::Complete) => info!("Conversion successful!"),
        Ok(WriteOutcome::Truncated { rows_written }) => {
            warn!(rows_written, "Output file is truncated")
        }
        Err(e) => error!("Conversion failed: {}", e),
    }

    ExitCode::SUCCESS
}

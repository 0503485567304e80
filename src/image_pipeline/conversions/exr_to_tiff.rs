use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    channels::{build_catalog, resolve_channels},
    common::error::{ConversionError, Result},
    exr::{ExrReader, ExrsReader},
    tiff::{ConversionConfig, StandardTiffWriter, TiffWriter, WriteOutcome},
};

pub struct ExrToTiffPipeline<R: ExrReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl ExrToTiffPipeline<ExrsReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ExrsReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: ExrReader, W: TiffWriter> ExrToTiffPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<WriteOutcome> {
        info!("Starting EXR to TIFF conversion");

        let header = {
            let _span = tracing::info_span!("read_header").entered();
            self.reader.read_header(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = header.width,
                height = header.height
            ).entered();
            self.validate_dimensions(header.width, header.height)?;
        }

        // Channels resolve before any pixel decoding, so a mapping conflict
        // aborts without touching pixel data or the output file.
        let resolved = {
            let _span = tracing::info_span!("resolve_channels").entered();
            let catalog = build_catalog(&header.channel_names);
            let resolved = resolve_channels(&catalog)?;
            if resolved.bindings.is_empty() {
                return Err(ConversionError::NoConvertibleChannels);
            }
            resolved
        };

        let planes = {
            let _span = tracing::info_span!("decode_planes").entered();
            self.reader.read_planes(input_data, &header)?
        };

        let outcome = {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_tiff(&planes, &resolved, output, &self.config)?
        };

        if let WriteOutcome::Truncated { rows_written } = outcome {
            warn!(
                rows_written,
                total_rows = header.height,
                "Conversion stopped early"
            );
        }

        info!(
            width = header.width,
            height = header.height,
            samples_per_pixel = resolved.samples_per_pixel(),
            convert_normals = resolved.convert_normals,
            "Conversion complete"
        );
        Ok(outcome)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<WriteOutcome> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // The output path is only touched once conversion has succeeded;
        // a fatal error (conflict, decode failure) leaves no file behind.
        let mut encoded = Vec::new();
        let outcome = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(outcome)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

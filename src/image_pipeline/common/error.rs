use thiserror::Error;

use crate::image_pipeline::channels::OutputChannel;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode EXR image: {0}")]
    DecodeError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("More than one channel maps to output channel {output}: {first} and {second}")]
    ChannelConflict {
        output: OutputChannel,
        first: String,
        second: String,
    },

    #[error("No recognized channels to convert")]
    NoConvertibleChannels,

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Missing pixel plane for channel: {0}")]
    MissingPlane(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

pub mod convert;
pub mod error;
pub mod frames;
pub mod normalize;
pub mod preview;

pub use convert::{BatchSummary, ConversionReport, Converter, ConverterConfig};
pub use error::{Error, Result};

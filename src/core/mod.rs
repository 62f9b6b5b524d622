pub mod errors;
pub mod interval;
pub mod bin_settings;
pub mod color;
pub mod backend;
pub mod make_histograms;

pub use self::backend::{HistogramBackend, Labeled, LineColored};
pub use self::bin_settings::BinSettings;
pub use self::color::{Color, ColorCursor, PALETTE};
pub use self::errors::*;
pub use self::interval::Interval;
pub use self::make_histograms::MakeHistograms;

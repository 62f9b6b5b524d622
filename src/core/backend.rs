use crate::core::bin_settings::BinSettings;
use crate::core::color::Color;

/// Title and axis label mutators of a histogram object.
pub trait Labeled {
    fn set_title(&mut self, title: &str);
    fn set_x_title(&mut self, title: &str);
    fn set_y_title(&mut self, title: &str);
}

/// Line and marker color of a histogram object.
pub trait LineColored {
    fn set_line_color(&mut self, color: Color);
}

/// The plotting library that owns histogram objects.
///
/// Handles returned by `create_1d`/`create_2d` refer to objects kept by the
/// backend; the caller never owns the underlying histogram.
pub trait HistogramBackend {
    type Hist1D: Labeled + LineColored;
    type Hist2D: Labeled;

    fn create_1d(&mut self, name: &str, title: &str, x_bins: &BinSettings) -> Self::Hist1D;

    fn create_2d(
        &mut self,
        name: &str,
        title: &str,
        x_bins: &BinSettings,
        y_bins: &BinSettings,
    ) -> Self::Hist2D;
}

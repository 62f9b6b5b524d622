use crate::core::backend::{Labeled, LineColored};
use crate::core::bin_settings::BinSettings;

/// Creates labeled histograms.
///
/// An empty `name` asks the implementation to generate one. Only
/// `apply_settings` has a default; it writes each non-empty argument onto
/// the histogram and skips the empty ones.
pub trait MakeHistograms {
    type Hist1D: Labeled + LineColored;
    type Hist2D: Labeled;

    fn make_1d(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        bins: &BinSettings,
        name: &str,
    ) -> Self::Hist1D;

    fn make_2d(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        x_bins: &BinSettings,
        y_bins: &BinSettings,
        name: &str,
    ) -> Self::Hist2D;

    fn apply_settings<H: Labeled + ?Sized>(&self, hist: &mut H, title: &str, x_label: &str, y_label: &str)
    where
        Self: Sized,
    {
        if !title.is_empty() {
            hist.set_title(title);
        }
        if !x_label.is_empty() {
            hist.set_x_title(x_label);
        }
        if !y_label.is_empty() {
            hist.set_y_title(y_label);
        }
    }

    fn reset_colors(&mut self);
}

use crate::core::*;

/// Value of the counter when a factory is created; the first anonymous
/// histogram is named `<prefix>_0`.
pub const FIRST_HISTNUM: u32 = 0;

/// Creates histograms on a backend, naming anonymous ones from a counter
/// and giving each 1D histogram the next palette color.
///
/// Not meant to be shared between threads without a lock around it; see
/// `concurrent::SharedFactory`.
pub struct HistogramFactory<B> {
    backend: B,
    name_prefix: String,
    histnum: u32,
    colors: ColorCursor,
}

impl<B: HistogramBackend> HistogramFactory<B> {
    /// `prefix` goes in front of every histogram name this factory makes.
    /// Set it to the name of the analysis step using the factory.
    pub fn new<S: Into<String>>(prefix: S, backend: B) -> HistogramFactory<B> {
        HistogramFactory {
            backend,
            name_prefix: prefix.into(),
            histnum: FIRST_HISTNUM,
            colors: ColorCursor::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.name_prefix
    }

    /// Number the next anonymous histogram will get.
    pub fn histnum(&self) -> u32 {
        self.histnum
    }

    pub fn color_cursor(&self) -> usize {
        self.colors.position()
    }

    pub fn loop_colors(&self) -> bool {
        self.colors.looping()
    }

    pub fn set_loop_colors(&mut self, onoff: bool) {
        self.colors.set_looping(onoff);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Resolves the name of the next histogram. An empty `name` consumes a
    /// counter value.
    pub fn next_hist_name(&mut self, name: &str) -> String {
        if name.is_empty() {
            let num = self.next_histnum();
            format!("{}_{}", self.name_prefix, num)
        } else {
            format!("{}_{}", self.name_prefix, name)
        }
    }

    #[cfg(test)]
    pub(crate) fn set_histnum(&mut self, histnum: u32) {
        self.histnum = histnum;
    }

    // wraps back to 0 after u32::MAX
    fn next_histnum(&mut self) -> u32 {
        let num = self.histnum;
        self.histnum = self.histnum.wrapping_add(1);
        num
    }
}

impl<B: HistogramBackend> MakeHistograms for HistogramFactory<B> {
    type Hist1D = B::Hist1D;
    type Hist2D = B::Hist2D;

    fn make_1d(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        bins: &BinSettings,
        name: &str,
    ) -> B::Hist1D {
        let name = self.next_hist_name(name);
        debug!("creating 1D histogram {} with {}", name, bins);
        let mut hist = self.backend.create_1d(&name, title, bins);
        self.apply_settings(&mut hist, title, x_label, y_label);
        hist.set_line_color(self.colors.next_color());
        hist
    }

    fn make_2d(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        x_bins: &BinSettings,
        y_bins: &BinSettings,
        name: &str,
    ) -> B::Hist2D {
        let name = self.next_hist_name(name);
        debug!("creating 2D histogram {} with x {} and y {}", name, x_bins, y_bins);
        let mut hist = self.backend.create_2d(&name, title, x_bins, y_bins);
        self.apply_settings(&mut hist, title, x_label, y_label);
        hist
    }

    fn reset_colors(&mut self) {
        self.colors.reset();
    }
}

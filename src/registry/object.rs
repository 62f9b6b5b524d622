use crate::core::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// Metadata the registry keeps for a 1D histogram.
#[derive(Clone, Debug, PartialEq)]
pub struct Hist1DRecord {
    pub name: String,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub x_bins: BinSettings,
    pub line_color: Option<Color>,
}

/// Metadata the registry keeps for a 2D histogram.
#[derive(Clone, Debug, PartialEq)]
pub struct Hist2DRecord {
    pub name: String,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub x_bins: BinSettings,
    pub y_bins: BinSettings,
}

/// Handle to a 1D histogram held by a `Registry`. Clones refer to the same
/// object.
#[derive(Clone, Debug)]
pub struct Hist1D(Arc<Mutex<Hist1DRecord>>);

/// Handle to a 2D histogram held by a `Registry`. Clones refer to the same
/// object.
#[derive(Clone, Debug)]
pub struct Hist2D(Arc<Mutex<Hist2DRecord>>);

impl Hist1D {
    pub(crate) fn new(name: &str, title: &str, x_bins: &BinSettings) -> Hist1D {
        Hist1D(Arc::new(Mutex::new(Hist1DRecord {
            name: name.to_string(),
            title: title.to_string(),
            x_title: String::new(),
            y_title: String::new(),
            x_bins: *x_bins,
            line_color: None,
        })))
    }

    pub fn name(&self) -> String {
        self.0.lock().name.clone()
    }

    pub fn title(&self) -> String {
        self.0.lock().title.clone()
    }

    pub fn x_title(&self) -> String {
        self.0.lock().x_title.clone()
    }

    pub fn y_title(&self) -> String {
        self.0.lock().y_title.clone()
    }

    pub fn x_bins(&self) -> BinSettings {
        self.0.lock().x_bins
    }

    pub fn line_color(&self) -> Option<Color> {
        self.0.lock().line_color
    }

    pub fn record(&self) -> Hist1DRecord {
        self.0.lock().clone()
    }

    pub fn same_object(&self, other: &Hist1D) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Hist2D {
    pub(crate) fn new(name: &str, title: &str, x_bins: &BinSettings, y_bins: &BinSettings) -> Hist2D {
        Hist2D(Arc::new(Mutex::new(Hist2DRecord {
            name: name.to_string(),
            title: title.to_string(),
            x_title: String::new(),
            y_title: String::new(),
            x_bins: *x_bins,
            y_bins: *y_bins,
        })))
    }

    pub fn name(&self) -> String {
        self.0.lock().name.clone()
    }

    pub fn title(&self) -> String {
        self.0.lock().title.clone()
    }

    pub fn x_title(&self) -> String {
        self.0.lock().x_title.clone()
    }

    pub fn y_title(&self) -> String {
        self.0.lock().y_title.clone()
    }

    pub fn x_bins(&self) -> BinSettings {
        self.0.lock().x_bins
    }

    pub fn y_bins(&self) -> BinSettings {
        self.0.lock().y_bins
    }

    pub fn record(&self) -> Hist2DRecord {
        self.0.lock().clone()
    }

    pub fn same_object(&self, other: &Hist2D) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Labeled for Hist1D {
    fn set_title(&mut self, title: &str) {
        self.0.lock().title = title.to_string();
    }

    fn set_x_title(&mut self, title: &str) {
        self.0.lock().x_title = title.to_string();
    }

    fn set_y_title(&mut self, title: &str) {
        self.0.lock().y_title = title.to_string();
    }
}

impl LineColored for Hist1D {
    fn set_line_color(&mut self, color: Color) {
        self.0.lock().line_color = Some(color);
    }
}

impl Labeled for Hist2D {
    fn set_title(&mut self, title: &str) {
        self.0.lock().title = title.to_string();
    }

    fn set_x_title(&mut self, title: &str) {
        self.0.lock().x_title = title.to_string();
    }

    fn set_y_title(&mut self, title: &str) {
        self.0.lock().y_title = title.to_string();
    }
}

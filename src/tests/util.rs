use crate::core::*;
use crate::registry::Registry;
use crate::st::HistogramFactory;
use std::cell::RefCell;
use std::rc::Rc;

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(($e as f64 - $v as f64).abs() <= $t as f64, "{} !~= {} within {}", $e, $v, $t)
    }
}

macro_rules! fails_with {
    ($e:expr, $err:expr) => {
        match $e {
            Err(e) => assert_eq!($err, e),
            Ok(v) => panic!("expected {:?}, got {:?}", $err, v),
        }
    }
}

pub fn registry_factory(prefix: &str) -> HistogramFactory<Registry> {
    HistogramFactory::new(prefix, Registry::new())
}

pub fn make_anon_1d(factory: &mut HistogramFactory<Registry>) -> crate::registry::Hist1D {
    factory.make_1d("title", "x", "y", &BinSettings::default(), "")
}

pub fn make_anon_2d(factory: &mut HistogramFactory<Registry>) -> crate::registry::Hist2D {
    factory.make_2d("title", "x", "y", &BinSettings::default(), &BinSettings::default(), "")
}

/// Backend that writes every call it receives into a shared log.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub calls: Rc<RefCell<Vec<String>>>,
}

pub struct RecordedHist {
    calls: Rc<RefCell<Vec<String>>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl RecordedHist {
    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Labeled for RecordedHist {
    fn set_title(&mut self, title: &str) {
        self.log(format!("title {}", title));
    }

    fn set_x_title(&mut self, title: &str) {
        self.log(format!("x {}", title));
    }

    fn set_y_title(&mut self, title: &str) {
        self.log(format!("y {}", title));
    }
}

impl LineColored for RecordedHist {
    fn set_line_color(&mut self, color: Color) {
        self.log(format!("color {}", color.code()));
    }
}

impl HistogramBackend for RecordingBackend {
    type Hist1D = RecordedHist;
    type Hist2D = RecordedHist;

    fn create_1d(&mut self, name: &str, title: &str, x_bins: &BinSettings) -> RecordedHist {
        self.calls.borrow_mut().push(format!(
            "create_1d {} {} {} {} {}",
            name, title, x_bins.bins(), x_bins.min(), x_bins.max()
        ));
        RecordedHist { calls: self.calls.clone() }
    }

    fn create_2d(&mut self, name: &str, title: &str, x_bins: &BinSettings, y_bins: &BinSettings) -> RecordedHist {
        self.calls.borrow_mut().push(format!(
            "create_2d {} {} {} {} {} {} {} {}",
            name, title,
            x_bins.bins(), x_bins.min(), x_bins.max(),
            y_bins.bins(), y_bins.min(), y_bins.max()
        ));
        RecordedHist { calls: self.calls.clone() }
    }
}

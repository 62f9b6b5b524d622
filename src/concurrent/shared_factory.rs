use crate::core::*;
use crate::st::HistogramFactory;
use parking_lot::Mutex;
use std::sync::Arc;

/// A `HistogramFactory` that several threads can use at once.
///
/// Every call holds the lock until the backend has returned, so names stay
/// unique and colors are handed out in cursor order no matter which thread
/// asks. Clones share the same factory.
pub struct SharedFactory<B> {
    inner: Arc<Mutex<HistogramFactory<B>>>,
}

impl<B> Clone for SharedFactory<B> {
    fn clone(&self) -> SharedFactory<B> {
        SharedFactory { inner: self.inner.clone() }
    }
}

impl<B: HistogramBackend> SharedFactory<B> {
    pub fn new<S: Into<String>>(prefix: S, backend: B) -> SharedFactory<B> {
        SharedFactory::from_factory(HistogramFactory::new(prefix, backend))
    }

    pub fn from_factory(factory: HistogramFactory<B>) -> SharedFactory<B> {
        SharedFactory { inner: Arc::new(Mutex::new(factory)) }
    }

    /// Runs `f` with the factory locked.
    ///
    /// The lock is not reentrant: calling back into this `SharedFactory`
    /// (or a clone of it) from inside `f` deadlocks. Use the `&mut
    /// HistogramFactory` passed to `f` instead.
    pub fn with_factory<R, F: FnOnce(&mut HistogramFactory<B>) -> R>(&self, f: F) -> R {
        f(&mut self.inner.lock())
    }

    pub fn histnum(&self) -> u32 {
        self.inner.lock().histnum()
    }

    pub fn loop_colors(&self) -> bool {
        self.inner.lock().loop_colors()
    }

    pub fn set_loop_colors(&self, onoff: bool) {
        self.inner.lock().set_loop_colors(onoff);
    }

    pub fn make_1d(
        &self,
        title: &str,
        x_label: &str,
        y_label: &str,
        bins: &BinSettings,
        name: &str,
    ) -> B::Hist1D {
        self.inner.lock().make_1d(title, x_label, y_label, bins, name)
    }

    pub fn make_2d(
        &self,
        title: &str,
        x_label: &str,
        y_label: &str,
        x_bins: &BinSettings,
        y_bins: &BinSettings,
        name: &str,
    ) -> B::Hist2D {
        self.inner.lock().make_2d(title, x_label, y_label, x_bins, y_bins, name)
    }

    pub fn reset_colors(&self) {
        self.inner.lock().reset_colors();
    }
}

impl<B: HistogramBackend> MakeHistograms for SharedFactory<B> {
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
        SharedFactory::make_1d(self, title, x_label, y_label, bins, name)
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
        SharedFactory::make_2d(self, title, x_label, y_label, x_bins, y_bins, name)
    }

    fn reset_colors(&mut self) {
        SharedFactory::reset_colors(self);
    }
}

use crate::core::errors::BinSettingsError;
use crate::core::interval::Interval;
use std::fmt;

const DEFAULT_BINS: u32 = 100;

/// Discretization of one histogram axis: a bin count over an interval.
///
/// The plain constructors do no validation; `bins == 0` or an inverted
/// range are passed on to the backend as they are. Use `try_new` to reject
/// them up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinSettings {
    bins: u32,
    range: Interval<f64>,
}

macro_rules! expect {
    ($t:expr, $e:expr) => {
        if $t { return Err($e); }
    };
}

impl BinSettings {
    pub fn new(bins: u32, min: f64, max: f64) -> BinSettings {
        BinSettings { bins, range: Interval::new(min, max) }
    }

    /// Unit width bins starting at zero, i.e. `[0, bins]`.
    pub fn with_bins(bins: u32) -> BinSettings {
        BinSettings::new(bins, 0.0, f64::from(bins))
    }

    pub fn from_interval(bins: u32, range: Interval<f64>) -> BinSettings {
        BinSettings { bins, range }
    }

    pub fn try_new(bins: u32, min: f64, max: f64) -> Result<BinSettings, BinSettingsError> {
        expect!(bins == 0, BinSettingsError::ZeroBins);
        expect!(!min.is_finite() || !max.is_finite(), BinSettingsError::NonFiniteBound);
        expect!(min >= max, BinSettingsError::EmptyRange);
        Ok(BinSettings::new(bins, min, max))
    }

    #[inline(always)]
    pub fn bins(&self) -> u32 {
        self.bins
    }

    pub fn bins_mut(&mut self) -> &mut u32 {
        &mut self.bins
    }

    pub fn bin_width(&self) -> f64 {
        self.range.length() / f64::from(self.bins)
    }

    pub fn range(&self) -> &Interval<f64> {
        &self.range
    }

    pub fn range_mut(&mut self) -> &mut Interval<f64> {
        &mut self.range
    }

    #[inline(always)]
    pub fn min(&self) -> f64 {
        self.range.start()
    }

    #[inline(always)]
    pub fn max(&self) -> f64 {
        self.range.stop()
    }
}

/// 100 bins over `[0, 100]`.
impl Default for BinSettings {
    fn default() -> BinSettings {
        BinSettings::new(DEFAULT_BINS, 0.0, f64::from(DEFAULT_BINS))
    }
}

impl From<u32> for BinSettings {
    fn from(bins: u32) -> BinSettings {
        BinSettings::with_bins(bins)
    }
}

impl From<(u32, f64, f64)> for BinSettings {
    fn from((bins, min, max): (u32, f64, f64)) -> BinSettings {
        BinSettings::new(bins, min, max)
    }
}

impl From<(u32, Interval<f64>)> for BinSettings {
    fn from((bins, range): (u32, Interval<f64>)) -> BinSettings {
        BinSettings::from_interval(bins, range)
    }
}

impl fmt::Display for BinSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bins {}", self.bins, self.range)
    }
}

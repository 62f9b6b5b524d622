use std::fmt;

/// A closed interval `[start, stop]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval<T> {
    start: T,
    stop: T,
}

impl<T: num::Float> Interval<T> {
    pub fn new(start: T, stop: T) -> Interval<T> {
        Interval { start, stop }
    }

    #[inline(always)]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline(always)]
    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn set_start(&mut self, start: T) {
        self.start = start;
    }

    pub fn set_stop(&mut self, stop: T) {
        self.stop = stop;
    }

    #[inline(always)]
    pub fn length(&self) -> T {
        self.stop - self.start
    }

    pub fn center(&self) -> T {
        (self.start + self.stop) / (T::one() + T::one())
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.stop
    }

    pub fn is_sane(&self) -> bool {
        self.start.is_finite() && self.stop.is_finite() && self.start <= self.stop
    }

    /// Grows the interval just enough to cover `value`.
    pub fn extend(&mut self, value: T) {
        if value < self.start {
            self.start = value;
        }
        if value > self.stop {
            self.stop = value;
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.start, self.stop)
    }
}

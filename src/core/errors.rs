use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BinSettingsError {
    ZeroBins,
    NonFiniteBound,
    EmptyRange,
}

impl fmt::Display for BinSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BinSettingsError::ZeroBins => write!(f, "number of bins must be positive"),
            BinSettingsError::NonFiniteBound => write!(f, "axis bounds must be finite"),
            BinSettingsError::EmptyRange => write!(f, "lower bound must be below upper bound"),
        }
    }
}

impl Error for BinSettingsError {}

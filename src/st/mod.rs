pub mod factory;
pub mod builder;

pub use self::builder::{builder, FactoryBuilder};
pub use self::factory::{HistogramFactory, FIRST_HISTNUM};

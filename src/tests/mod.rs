#[macro_use]
mod util;

mod registry;

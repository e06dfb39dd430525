//! Bootstrap helpers compiled only for unit tests.

pub mod logging;

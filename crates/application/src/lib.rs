//! Ferrous Recursor Application Layer
pub mod ports;
pub mod use_cases;
pub mod wire;

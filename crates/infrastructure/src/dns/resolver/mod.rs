pub mod iterative;

pub use iterative::{IterativeResolver, DNS_PORT};

pub mod buckets;
pub mod spin;

pub use buckets::*;
pub use spin::*;

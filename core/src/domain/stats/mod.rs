pub mod buckets;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use buckets::*;
pub use ports::*;
pub use value_objects::*;

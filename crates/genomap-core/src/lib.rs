pub mod feature;
pub mod genome;

pub use feature::*;
pub use genome::*;

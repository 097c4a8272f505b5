pub mod sentiment;
pub mod terms;

pub use sentiment::*;
pub use terms::*;

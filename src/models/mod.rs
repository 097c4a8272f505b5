pub mod dialogue;
pub mod interaction;
pub mod scene;

pub use dialogue::*;
pub use interaction::*;
pub use scene::*;

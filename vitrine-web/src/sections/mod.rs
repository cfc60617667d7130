//! Page sections, top to bottom

pub mod download;
pub mod features;
pub mod hero;
pub mod showcase;
pub mod tech;

pub use download::Download;
pub use features::Features;
pub use hero::Hero;
pub use showcase::Showcase;
pub use tech::TechStack;

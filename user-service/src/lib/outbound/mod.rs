pub mod clock;
pub mod directory;
pub mod repositories;

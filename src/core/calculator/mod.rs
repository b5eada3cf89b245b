pub mod elapsed;
pub mod quitting;

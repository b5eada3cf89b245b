pub mod calculator;
pub mod refresh;
pub mod thingy;
pub mod ticker;

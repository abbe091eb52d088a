pub mod dump;
pub mod input;
pub mod matches;
pub mod trace;

pub mod audio;
pub mod generation;
pub mod observability;
pub mod persistence;
pub mod synthesis;

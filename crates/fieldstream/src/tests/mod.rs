mod serialize;
pub mod utils;

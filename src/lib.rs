pub mod builders;
pub mod core;
pub mod utils;

mod tests;

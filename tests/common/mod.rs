pub mod app;
pub mod asserts;
pub mod builders;

pub mod ports;
pub mod token;
pub mod use_cases;

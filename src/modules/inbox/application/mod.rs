pub mod domain;
pub mod inbox_use_cases;
pub mod ports;
pub mod services;

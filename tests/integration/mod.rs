pub mod auth_flow_tests;
pub mod cache_tests;
pub mod endpoint_wiring_tests;
pub mod error_normalization_tests;

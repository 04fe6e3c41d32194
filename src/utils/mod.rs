pub mod error_handler;
pub mod pagination;
pub mod password;
pub mod response_handler;

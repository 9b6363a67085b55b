pub mod knockout;
pub mod pixel;
pub mod utils;

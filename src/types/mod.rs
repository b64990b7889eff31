pub mod cover;
pub mod search_result;
pub mod work;

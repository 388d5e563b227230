pub mod response;
pub mod sponsored;
pub mod transaction;

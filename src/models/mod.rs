pub mod filter;
pub mod scope;
pub mod shift;
pub mod shift_type;
pub mod summary;

pub mod aggregate;
pub mod entry;
pub mod filter;
pub mod ingest;
pub mod logic;
pub mod normalize;
pub mod payroll;
pub mod recompute;
pub mod scope;
pub mod session;

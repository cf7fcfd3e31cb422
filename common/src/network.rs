pub mod host;
pub mod interface;

pub mod redirect;
pub mod shrink;

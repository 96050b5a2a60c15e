pub mod chain_info;
pub mod simulate;

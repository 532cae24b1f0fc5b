pub mod gmail;
pub mod in_memory;

pub mod scream;
pub mod shared;
pub mod social;

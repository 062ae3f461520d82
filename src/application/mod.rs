pub mod screams;
pub mod social;

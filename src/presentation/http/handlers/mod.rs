pub mod health;
pub mod screams;
pub mod social;

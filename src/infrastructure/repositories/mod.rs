pub mod sqlx_scream_repository;
pub mod sqlx_social_repository;

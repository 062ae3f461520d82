use crate::{
    application::{screams::use_case::ScreamsUseCase, social::use_case::SocialUseCase},
    config::Config,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub screams: Arc<ScreamsUseCase>,
    pub social: Arc<SocialUseCase>,
}

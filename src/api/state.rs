use std::sync::Arc;

use crate::config::AppConfig;
use crate::provider::StatProvider;
use crate::retrieve::{ProfileService, ShotService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn StatProvider>,
    pub profiles: Arc<ProfileService>,
    pub shots: Arc<ShotService>,
}

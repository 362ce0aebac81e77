use std::sync::Arc;

use reservapp_auth::TokenCodec;
use reservapp_config::{CorsConfig, GateConfig};
use tracing::{info, warn};

use crate::access::{RouteGuard, RouteTables};
use crate::middleware::matchers::InterceptMatchers;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate_config: GateConfig,
    pub cors_config: CorsConfig,
    pub guard: Arc<RouteGuard>,
    pub matchers: Arc<InterceptMatchers>,
}

impl AppState {
    /// State over the default ReservApp tables and matchers.
    pub fn new(gate_config: GateConfig, cors_config: CorsConfig) -> anyhow::Result<Self> {
        let codec = TokenCodec::from_secret(gate_config.jwt_secret.as_deref());
        let guard = RouteGuard::new(RouteTables::reservapp()?, codec);
        let matchers = InterceptMatchers::reservapp()?;

        Ok(Self {
            gate_config,
            cors_config,
            guard: Arc::new(guard),
            matchers: Arc::new(matchers),
        })
    }
}

pub fn init_app_state() -> anyhow::Result<AppState> {
    let state = AppState::new(GateConfig::from_env()?, CorsConfig::from_env())?;

    for shadowed in state.guard.tables().shadowed_rules() {
        warn!(
            pattern = %shadowed.pattern,
            shadowed_by = %shadowed.shadowed_by,
            "Protected rule can never match; an earlier rule covers it"
        );
    }
    info!(
        verify_signatures = state.gate_config.jwt_secret.is_some(),
        protected_rules = state.guard.tables().protected_rules().len(),
        "Route gate initialized"
    );

    Ok(state)
}

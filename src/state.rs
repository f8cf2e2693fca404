use std::sync::Arc;

use crate::{analysis::ScreenshotAnalyzer, db::OrmConn, session::SessionGuard};

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    pub sessions: Arc<SessionGuard>,
    pub analyzer: Arc<dyn ScreenshotAnalyzer>,
    pub cookie_secure: bool,
}

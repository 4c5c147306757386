use tracing::trace;

use super::handler::handle_move;
use super::response::ApiResponse;
use crate::config::ApiConfig;

/// Decides which inbound requests belong to the engine.
///
/// Only `POST` to the move path is handled. Everything else is left to
/// whatever serves static assets, signalled by returning `None`.
#[derive(Debug, Clone)]
pub struct Router {
    move_path: String,
}

impl Router {
    pub fn new(config: &ApiConfig) -> Self {
        Router {
            move_path: config.move_path.clone(),
        }
    }

    pub fn move_path(&self) -> &str {
        &self.move_path
    }

    /// Route a request. `path` may carry a query string, which is ignored.
    pub fn dispatch(&self, method: &str, path: &str, body: &[u8]) -> Option<ApiResponse> {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        if method != "POST" || path != self.move_path {
            trace!(method, path, "not routed");
            return None;
        }
        Some(handle_move(body))
    }
}

impl Default for Router {
    fn default() -> Self {
        Router::new(&ApiConfig::default())
    }
}

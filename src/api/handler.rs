use tracing::{error, info, instrument, warn};

use super::request::MoveBody;
use super::response::ApiResponse;
use crate::error::RequestError;
use crate::game::{resolve_move, Resolution};

/// Handle one move submission: parse, validate, resolve, and render.
///
/// Client errors are reported before the engine runs. Anything that cannot be
/// decoded into a well-formed request becomes an internal failure with zeroed
/// scores; no partially updated board is ever returned.
#[instrument(skip_all, fields(bytes = body.len()))]
pub fn handle_move(body: &[u8]) -> ApiResponse {
    match process(body) {
        Ok(resolution) => {
            info!(
                passes = resolution.passes,
                red = resolution.scores.red,
                yellow = resolution.scores.yellow,
                "move accepted"
            );
            ApiResponse::ok(resolution)
        }
        Err(err) => {
            match &err {
                RequestError::Malformed(reason) => error!(%reason, "failed to process move"),
                _ => warn!(error = %err, "move rejected"),
            }
            ApiResponse::error(&err)
        }
    }
}

fn process(body: &[u8]) -> Result<Resolution, RequestError> {
    let (grid, mv) = MoveBody::from_slice(body)?.validate()?;
    Ok(resolve_move(&grid, mv)?)
}

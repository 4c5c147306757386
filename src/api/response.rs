use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::game::{Board, Resolution, ScoreTally};

pub const CONTENT_TYPE: &str = "application/json";

/// Body of a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub grid: Board,
    pub scores: ScoreTally,
}

impl From<Resolution> for MoveResponse {
    fn from(resolution: Resolution) -> Self {
        MoveResponse {
            grid: resolution.board,
            scores: resolution.scores,
        }
    }
}

/// Body of a rejected or failed move. Internal failures also carry a zeroed
/// tally so clients can keep rendering scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreTally>,
}

impl From<&RequestError> for ErrorBody {
    fn from(err: &RequestError) -> Self {
        let scores = (!err.is_client_error()).then(ScoreTally::new);
        ErrorBody {
            error: err.to_string(),
            scores,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Move(MoveResponse),
    Error(ErrorBody),
}

/// Status plus JSON body, ready for the host to put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn ok(resolution: Resolution) -> Self {
        ApiResponse {
            status: 200,
            body: ResponseBody::Move(resolution.into()),
        }
    }

    pub fn error(err: &RequestError) -> Self {
        ApiResponse {
            status: err.status(),
            body: ResponseBody::Error(err.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(&self.body)
        } else {
            serde_json::to_string(&self.body)
        }
    }
}

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::RequestError;
use crate::game::{Board, MoveRequest, Player, COLS};

/// JSON body of a move submission.
///
/// Every field is optional at this level so that absent values surface as
/// [`RequestError::MissingFields`] rather than as a parse failure. The older
/// `matrix` / `currentPlayer` names are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveBody {
    #[serde(default, alias = "matrix")]
    pub grid: Option<Board>,
    #[serde(default, alias = "currentPlayer")]
    pub current_marker: Option<String>,
    #[serde(default)]
    pub column: Option<Number>,
}

impl MoveBody {
    /// Decode a raw request body.
    ///
    /// Only a JSON object carries named fields: any other non-null value is
    /// treated as having none of them. `null` and unparseable input are
    /// malformed.
    pub fn from_slice(body: &[u8]) -> Result<MoveBody, RequestError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(RequestError::Malformed("request body is null".into())),
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            _ => Ok(MoveBody::default()),
        }
    }

    /// Check the body in the order clients rely on (missing fields, column
    /// range, full column) and produce the engine's inputs.
    pub fn validate(self) -> Result<(Board, MoveRequest), RequestError> {
        let (grid, marker, column) = match (self.grid, self.current_marker, self.column) {
            (Some(grid), Some(marker), Some(column)) if !marker.is_empty() => {
                (grid, marker, column)
            }
            _ => return Err(RequestError::MissingFields),
        };

        if column.is_f64() {
            return Err(RequestError::Malformed(format!(
                "column {column} is not an integer"
            )));
        }
        let column = column
            .as_u64()
            .and_then(|c| usize::try_from(c).ok())
            .filter(|&c| c < COLS)
            .ok_or(RequestError::InvalidColumn(column))?;

        if grid.is_column_full(column) {
            return Err(RequestError::ColumnFull(column));
        }

        let player = marker
            .parse::<Player>()
            .map_err(|e| RequestError::Malformed(e.to_string()))?;

        Ok((grid, MoveRequest::new(column, player)))
    }
}

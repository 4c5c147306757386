//! JSON request boundary around the engine: request validation, response
//! rendering, and routing of move submissions.

mod handler;
mod request;
mod response;
mod router;

pub use handler::handle_move;
pub use request::MoveBody;
pub use response::{ApiResponse, ErrorBody, MoveResponse, ResponseBody, CONTENT_TYPE};
pub use router::Router;

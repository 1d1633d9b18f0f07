pub mod commands;
pub mod events;
pub mod types;

pub use commands::{CallRequest, FETCH_METHOD, SUBMIT_METHOD};
pub use events::CallReply;
pub use types::{SubmitRequest, TranscriptSnapshot};

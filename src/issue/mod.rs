pub mod derive;
pub mod payload;

pub use payload::IssuePayload;

pub mod entity;
pub mod envelope;
pub mod intent;

pub use entity::{Entity, EntityType, TableDetails};
pub use envelope::{
    RequestBody, RequestEnvelope, RequestHeader, ResponseBody, ResponseEnvelope, ResponseHeader,
};
pub use intent::Intent;

/// Question text used when the request body carries no `query` field.
pub const DEFAULT_QUERY: &str = "Generate a SQL query based on the intent";

//! Request extractors.

mod body;
pub use body::{DecodedBody, JsonBody};

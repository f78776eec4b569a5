//! Request/response pipeline shared by every resource accessor
//!
//! - `query`: options value to URL query string encoding
//! - `response`: status and content-type aware response decoding

pub mod query;
pub mod response;

// Re-export commonly used items for convenience
pub use query::{add_options, QueryScalar, QueryValue, QueryWriter, ToQuery};
pub use response::{Response, ResponseParts};

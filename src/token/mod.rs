//! Token values and errors.
//!
//! - [`TokenReference`]: a raw token value, classified as literal or reference
//! - [`is_reference`]: the classifier as a free function
//! - [`TokenError`] / [`ErrorKind`]: errors shared by the whole crate

mod error;
mod reference;

pub use error::{ErrorKind, NotFoundKind, TokenError};
pub use reference::{
    is_reference, is_valid_segment, validate_path, TokenReference, CSS_FUNCTION_PREFIXES,
    CSS_UNITS,
};

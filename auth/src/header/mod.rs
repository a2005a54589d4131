pub mod challenge;
pub mod errors;
pub mod extractor;

pub use errors::PayloadError;
pub use extractor::AuthorizationHeader;
pub use extractor::BasicCredentials;

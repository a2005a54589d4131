pub mod bearer;
pub mod errors;
pub mod expiry;
pub mod issuer;

pub use bearer::decode_bearer_token;
pub use bearer::decode_token_value;
pub use bearer::encode_bearer_token;
pub use bearer::DecodedBearerToken;
pub use errors::BearerTokenError;
pub use errors::TokenError;
pub use expiry::TOKEN_EXPIRATION_SECONDS;
pub use issuer::TokenIssuer;

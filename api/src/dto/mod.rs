pub mod tokens;

pub use sigil_core::domain::IpStatusEntry;
pub use sigil_core::errors::ErrorResponse;
pub use tokens::{
    IssueTokenRequest, IssueTokenResponse, RevokeTokenRequest, VerifyTokenRequest,
    VerifyTokenResponse,
};

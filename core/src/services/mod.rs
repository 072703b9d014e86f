//! Business services containing domain logic and use cases.

pub mod access_list;
pub mod token;

pub use access_list::AccessListService;
pub use token::{
    Rs256KeyManager, RevocationSweeper, SweepResult, SweeperConfig, TokenService,
    TokenServiceConfig,
};

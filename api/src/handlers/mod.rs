pub mod error;

pub use error::{
    handle_access_list_error, handle_token_error, json_error_handler, status_for,
};

pub mod client;
pub mod error;

pub use client::Client;
pub use error::{ApiError, Error};

/// Header carrying the SDK identity on every request.
pub const CLIENT_ID_HEADER_KEY: &str = "client";

lazy_static::lazy_static! {
    /// A value to represent the client id of this SDK.
    pub static ref CLIENT_ID: String = client_id();
}

/// Get the client id.
pub fn client_id() -> String {
    let rust_version = match rustc_version::version() {
        Ok(v) => v.to_string(),
        Err(_) => "unknown".to_string(),
    };
    let crate_name = env!("CARGO_PKG_NAME");
    let crate_version = env!("CARGO_PKG_VERSION");
    format!("rustv{rust_version}/{crate_name}/{crate_version}")
}

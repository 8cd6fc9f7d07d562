/// REST access to the remote roster resource

pub mod client;
pub mod error;

pub use client::RosterApi;
pub use error::ApiError;

//! Postal-code lookup service client.
//!
//! Resolves an 8-digit CEP to a structured street/neighborhood/city/state
//! address. An unknown code is a `None`, not an error: only transport and
//! API failures surface as `ViaCepError`.

mod client;
mod error;

pub use client::{PostalAddress, ViaCepClient, ViaCepConfig};
pub use error::ViaCepError;

//! Prelude module for convenient imports.
//!
//! ```ignore
//! use twilio::prelude::*;
//! ```

pub use crate::{
    ApiClient, CancellationToken, ClientConfig, Context, Error, HttpClient, HyperHandler,
    RequestHandler, Result, StatusCode,
};
pub use serde::{Deserialize, Serialize};

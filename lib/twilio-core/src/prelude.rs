//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use twilio_core::prelude::*;
//! ```

pub use crate::{
    BoxError, ContentType, Context, Credentials, Error, HttpClient, Interrupted, InvalidTarget,
    Method, Request, RequestBuilder, RequestHandler, Response, Result, from_json, parse_target,
    to_json,
};

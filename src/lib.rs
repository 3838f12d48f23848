// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
//! Tencent Cloud VPC error vocabulary and client-side error handling.
//!
//! This crate re-exports the workspace libraries under one roof:
//!
//! - [`codes`]: the VPC error-code table.
//! - [`error`]: the SDK error type and response parsing.
//! - [`retry`]: backoff, retry layers, and the region breaker.
//! - [`config`]: client profiles.
//!
//! ```
//! use tcvpc::codes::VpcErrorCode;
//! use tcvpc::error::ErrorCategory;
//!
//! let code: VpcErrorCode = "InvalidVpcId.NotFound".parse().unwrap();
//! assert_eq!(code.category(), ErrorCategory::Product);
//! ```

pub use tcvpc_codes as codes;
pub use tcvpc_config as config;
pub use tcvpc_error as error;
pub use tcvpc_retry as retry;

pub use tcvpc_codes::VpcErrorCode;
pub use tcvpc_config::ClientProfile;
pub use tcvpc_error::{ErrorCategory, SdkError};
pub use tcvpc_retry::{Backoff, RegionBreaker, RetryPolicy};

//! HTTP header name constants.
//!
//! This module defines constants for the security and infrastructure headers
//! inspected by the scorers.

// Security header names
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";

// Infrastructure/server identification headers
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "Server";
/// X-Powered-By header (identifies application framework)
pub const HEADER_X_POWERED_BY: &str = "X-Powered-By";

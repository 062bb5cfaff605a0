//! Route prefixes and transport limits.

use gallery_core::constants::MAX_UPLOAD_SIZE_BYTES;

/// Prefix shared by every API route.
pub const API_PREFIX: &str = "/api";

/// Request body ceiling: the upload limit plus room for multipart framing.
pub const MAX_REQUEST_BODY_BYTES: usize = MAX_UPLOAD_SIZE_BYTES + (1 << 20);

//! Fixed limits and naming rules shared by the service and HTTP layers.

/// Maximum accepted upload size (10 MiB).
pub const MAX_UPLOAD_SIZE_BYTES: usize = 10 << 20;

/// Lifetime of an admin access token.
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Prefix under which every image blob is stored.
pub const IMAGE_KEY_PREFIX: &str = "images/";

/// Accepted upload extensions, lowercase and including the leading dot.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

//! User-facing status messages for the copy field.

pub const CLIPBOARD_NOT_SUPPORTED: &str =
    "Your browser does not support clipboard operations.";

pub const COPY_FAILED: &str = "Copy failed. Please try again later.";

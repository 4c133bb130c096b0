/// Product constants shared across crates
pub const PRODUCT_NAME: &str = "kunai";
pub const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_PRODUCT_ID: &str =
    const_str::concat!("-//", PRODUCT_NAME, "//", PRODUCT_NAME, " ", PRODUCT_VERSION, "//EN");

/// vCard format versions the renderer can emit.
pub const SUPPORTED_VERSIONS: &[&str] = &["3.0", "4.0"];
pub const DEFAULT_VERSION: &str = "4.0";

/// Conflict mode used when a singleton property is added twice.
pub const DEFAULT_CONFLICT_MODE: &str = "overwrite";

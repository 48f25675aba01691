//! Crate-wide constants.
//!
//! Centralizes default timings, raw button codes and channel names so the
//! pointer layer and its callers agree on them.

// ============================================================================
// Scheduling
// ============================================================================

/// Default debounce delay in milliseconds (fire on the next tick)
pub const DEFAULT_DEBOUNCE_MS: u64 = 0;

// ============================================================================
// Raw Button Codes
// ============================================================================

/// Platform code of the primary (left) mouse button
pub const RAW_BUTTON_PRIMARY: u16 = 0;

/// Platform code of the auxiliary (middle) mouse button
pub const RAW_BUTTON_AUXILIARY: u16 = 1;

/// Platform code of the secondary (right) mouse button
pub const RAW_BUTTON_SECONDARY: u16 = 2;

// ============================================================================
// Pointer Channels
// ============================================================================

pub const CHANNEL_PRIMARY_DOWN: &str = "primary-down";
pub const CHANNEL_PRIMARY_MOVE: &str = "primary-move";
pub const CHANNEL_PRIMARY_UP: &str = "primary-up";
pub const CHANNEL_SECONDARY_DOWN: &str = "secondary-down";
pub const CHANNEL_SECONDARY_UP: &str = "secondary-up";

/// Primary press that landed on a scrollbar gutter
pub const CHANNEL_SCROLL_DOWN: &str = "scroll-down";

/// Primary release that landed on a scrollbar gutter
pub const CHANNEL_SCROLL_UP: &str = "scroll-up";

/// Primary release seen anywhere in the document
pub const CHANNEL_DOCUMENT_PRIMARY_UP: &str = "document-primary-up";

// ============================================================================
// Performance
// ============================================================================

/// A single input dispatch slower than this is logged as a warning
pub const SLOW_DISPATCH_MS: f64 = 4.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "pointerkit";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

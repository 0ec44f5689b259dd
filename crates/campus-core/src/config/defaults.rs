// Single source of truth for all default values.

// --- Assistant ---
pub const DEFAULT_COURSE_LIST_CAP: usize = 4;
pub const DEFAULT_EVENT_LIST_CAP: usize = 3;
pub const DEFAULT_NOTE_LIST_CAP: usize = 4;
pub const DEFAULT_RECENT_NOTE_CAP: usize = 3;
pub const DEFAULT_ANNOUNCEMENT_LIST_CAP: usize = 3;
pub const DEFAULT_MIN_ENTITY_WORD_LEN: usize = 4;

// --- Support ---
pub const DEFAULT_SUPPORT_ENABLED: bool = false;
pub const DEFAULT_SUPPORT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_TICKET_PATH: &str = "/tickets";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Files ---
pub const DEFAULT_CONFIG_FILENAME: &str = "campus.toml";

//! Constants used throughout the application
//!
//! This module centralizes storage keys, UI text, and other constant values
//! to improve maintainability and consistency.

// Local storage keys
/// Key holding the structured backup of the full item list
pub const LOCAL_STORAGE_KEY: &str = "campus_lost_found_backup";
/// Key holding the last simulated cloud snapshot
pub const CLOUD_SNAPSHOT_KEY: &str = "cloud_simulation";
/// Source tag recorded in every simulated cloud snapshot
pub const CLOUD_SNAPSHOT_SOURCE: &str = "cloud_simulation";

// Remote endpoints
pub const DEFAULT_PRIMARY_URL: &str = "https://api.npoint.io/8f3b5c9c1d1d1d1d1d1d";
pub const DEFAULT_SECONDARY_URL: &str = "https://raw.githubusercontent.com/yourusername/lost-found-data/main/data.txt";
/// Shown in the cloud info dialog as the logical location of the shared file
pub const CLOUD_FILE_URL: &str = "https://cloud.github.com/lost_found_data.txt";

// Timing defaults
pub const DEFAULT_AUTO_REFRESH_SECS: u64 = 30;
pub const DEFAULT_SIMULATED_SAVE_DELAY_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TOAST_SECS: u64 = 3;

// Toast messages
pub const TOAST_LOADED_CLOUD: &str = "Loaded {} items from cloud";
pub const TOAST_LOADED_BACKUP: &str = "Loaded {} items from backup";
pub const TOAST_DEMO_DATA: &str = "Using demo data - no cloud connection";
pub const TOAST_SYNC_FAILED: &str = "Could not connect to cloud";
pub const TOAST_SAVED_CLOUD: &str = "Item saved to cloud successfully!";
pub const TOAST_SAVED_LOCALLY: &str = "Saved locally (cloud unavailable)";
pub const TOAST_SAVE_ERROR: &str = "Error saving data";
pub const TOAST_SYNC_BUSY: &str = "Sync already in progress";

// Sync status labels
pub const STATUS_IDLE: &str = "Not synced yet";
pub const STATUS_SYNCING: &str = "Syncing with cloud...";
pub const STATUS_SYNCED: &str = "Synced";
pub const STATUS_SYNC_FAILED: &str = "Sync failed";
pub const STATUS_SAVING: &str = "Saving to cloud...";
pub const STATUS_SAVED: &str = "Saved";
pub const STATUS_SAVED_LOCALLY: &str = "Saved locally";
pub const STATUS_SAVE_FAILED: &str = "Error";

// Validation messages
pub const ERROR_MISSING_NAME: &str = "❌ Item name is required";
pub const ERROR_MISSING_LOCATION: &str = "❌ Location is required";
pub const ERROR_MISSING_DESCRIPTION: &str = "❌ Description is required";
pub const ERROR_MISSING_CONTACT: &str = "❌ Contact information is required";
pub const ERROR_INVALID_DATE: &str = "❌ Date must be in YYYY-MM-DD format";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ANONYMOUS_REPORTER: &str = "Anonymous";
pub const EMPTY_LIST_TITLE: &str = "No items found";
pub const EMPTY_LIST_HINT: &str = "Be the first to report a lost or found item! Press 'l' or 'f'.";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'g' or 'q' to close";

/// Time format used for the "last sync" indicator
pub const LAST_SYNC_FORMAT: &str = "%H:%M";

//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Height of the header line (title and load status).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pager line below the table.
pub const PAGER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the checkbox column, including padding.
pub const CHECKBOX_COLUMN_WIDTH: u16 = 3;

/// Relative widths of the name, email and role columns.
pub const NAME_EMAIL_ROLE_RATIOS: [u32; 3] = [3, 4, 2];

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width of the delete confirmation dialog in columns.
pub const CONFIRM_DIALOG_WIDTH: u16 = 52;

/// Height of the delete confirmation dialog in lines.
pub const CONFIRM_DIALOG_HEIGHT: u16 = 5;

/// How many numbered page buttons the pager shows at most.
pub const PAGER_MAX_BUTTONS: usize = 9;

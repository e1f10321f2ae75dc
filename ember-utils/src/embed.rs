/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x6A_4C_9C;
/// Accent color for punishment notices.
pub const PUNISHMENT_EMBED_COLOR: u32 = 0xC0_3B_2E;
/// Accent color for release notices.
pub const RELEASE_EMBED_COLOR: u32 = 0x2E_6E_C0;

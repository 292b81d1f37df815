pub const HEADER_SIZE: usize = 48;
pub const HEADER_TOKEN_COUNT: usize = 5;

pub const MAKER_TOKEN: &str = "BOSS";
pub const FAMILY_TOKEN: &str = "BR0";
pub const FORMAT_TOKEN: &str = "Format";
pub const SUPPORTED_VERSION: &str = "Ver1.00BR-900";

/// First byte of device-written raw audio payloads.
pub const AUDIO_SENTINEL: u8 = 0x3F;

pub const TAG_DISKINFO: &str = "DISKINFO";
pub const TAG_SONGINFO2: &str = "SONGINFO2";

pub const DISKINFO_COUNT_DIGITS: usize = 4;
pub const DISKINFO_PADDING: usize = 2;

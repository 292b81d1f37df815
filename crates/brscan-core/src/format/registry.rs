use super::layout;

/// Body decoder families a header tag can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderKind {
    DiskInfo,
    SongInfo,
    Unimplemented,
}

/// Registered record-type tags, fixed at compile time. Tags mapped to
/// `Unimplemented` are containers the device writes that have no field
/// decoder yet.
pub const REGISTERED_TAGS: &[(&str, DecoderKind)] = &[
    (layout::TAG_DISKINFO, DecoderKind::DiskInfo),
    (layout::TAG_SONGINFO2, DecoderKind::SongInfo),
    ("ARRANGE", DecoderKind::Unimplemented),
    ("DRUMKIT", DecoderKind::Unimplemented),
    ("EFFECTS", DecoderKind::Unimplemented),
    ("TAKE_EVT", DecoderKind::Unimplemented),
    ("PATTERN", DecoderKind::Unimplemented),
    ("PITCHMAP", DecoderKind::Unimplemented),
];

pub fn lookup(tag: &str) -> Option<DecoderKind> {
    REGISTERED_TAGS
        .iter()
        .find(|(registered, _)| *registered == tag)
        .map(|(_, kind)| *kind)
}

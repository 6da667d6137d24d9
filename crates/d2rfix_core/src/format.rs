//! Fixed layout of the `.d2s` header and the format validity check.

/// File magic at offset 0.
pub const MAGIC: [u8; 4] = [0x55, 0xAA, 0x55, 0xAA];

/// Offset of the save format version byte.
pub const VERSION_OFFSET: usize = 4;

/// Oldest version byte this tool accepts (Diablo II: Resurrected).
pub const MIN_VERSION: u8 = 0x61;

/// Every supported save is at least this long. All patched offsets
/// fall inside this prefix, so a single length check up front covers
/// every later write.
pub const HEADER_LENGTH: usize = 765;

/// Offset of the 4-byte file checksum.
pub const CHECKSUM_OFFSET: usize = 0x0C;

/// Character progression flags (difficulty completion bits).
pub const PROGRESSION_OFFSET: usize = 0x25;

/// Start of the quest data section.
pub const QUESTS_SECTION_OFFSET: usize = 0x014F;

/// Start of the waypoint data section.
pub const WAYPOINTS_SECTION_OFFSET: usize = 0x0279;

/// Bytes from the waypoint section start to the first difficulty's
/// waypoint bits.
pub const WAYPOINTS_DATA_OFFSET: usize = 0x08;

/// Stride between the per-difficulty waypoint blocks.
pub const WAYPOINTS_DIFFICULTY_STRIDE: usize = 0x18;

/// Whether `data` looks like a supported save file.
///
/// Pure predicate, no side effects: too-short buffers, wrong magic
/// bytes and pre-Resurrected version bytes all return `false`.
pub fn is_valid(data: &[u8]) -> bool {
    if data.len() < HEADER_LENGTH {
        return false;
    }
    if data[..4] != MAGIC {
        return false;
    }
    data[VERSION_OFFSET] >= MIN_VERSION
}

//! Unlock profiles as declarative edit lists.
//!
//! A policy is a fixed, ordered set of byte edits. Almost everything
//! is an OR-merge into the existing byte, so applying a policy twice
//! is the same as applying it once; the quest helper in
//! [`crate::quest`] is the only place literal writes happen.

use serde::{Deserialize, Serialize};

use crate::format::{
    PROGRESSION_OFFSET, QUESTS_SECTION_OFFSET, WAYPOINTS_DATA_OFFSET,
    WAYPOINTS_DIFFICULTY_STRIDE, WAYPOINTS_SECTION_OFFSET,
};
use crate::quest::Difficulty;

/// Progression bit for a finished normal-difficulty playthrough;
/// setting it opens every difficulty on the character screen.
pub const GAME_COMPLETED_ON_NORMAL: u8 = 0x08;

/// Waypoint bit for the Kurast Docks arrival point, the first
/// waypoint of Act 3.
pub const ACT3_FIRST_WAYPOINT: u8 = 0x04;

/// Offset of the Act 3 waypoint flag within a difficulty's block.
const WAYPOINT_FLAG_BYTE: usize = 4;

/// Where [`QUEST_MASK_TABLE`] lands in the file: the quest section's
/// 10 header bytes precede the windowed quest data.
pub const QUEST_TABLE_BASE: usize = QUESTS_SECTION_OFFSET + 10;

/// OR-masks over the quest data region, indexed relative to
/// [`QUEST_TABLE_BASE`]. Zero entries leave the byte alone.
///
/// The window covers every quest byte (0x01), log byte (0x10) and
/// act-travel byte (0x01) for all of Normal and Nightmare, and Hell
/// up through the Diablo kill at relative offset 248. The 0xC1
/// entries fold the scroll-of-resistance reward into the Prison of
/// Ice quest byte.
pub const QUEST_MASK_TABLE: [u8; 249] = [
    0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x00, 0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00, 0x00, 0x00, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00,
    0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x10,
    0x01, 0x10, 0xC1, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x00, 0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00, 0x00, 0x00, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00,
    0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x10,
    0x01, 0x10, 0xC1, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x00, 0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00, 0x00, 0x00, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x00,
    0x00, 0x00, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01,
];

/// How an [`Edit`] combines with the byte already in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyMode {
    /// OR the value into the existing byte.
    Or,
    /// Overwrite the byte with the value.
    Set,
}

/// One byte-level mutation. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub offset: usize,
    pub value: u8,
    pub mode: ApplyMode,
}

impl Edit {
    pub const fn or(offset: usize, mask: u8) -> Self {
        Self {
            offset,
            value: mask,
            mode: ApplyMode::Or,
        }
    }

    pub const fn set(offset: usize, value: u8) -> Self {
        Self {
            offset,
            value,
            mode: ApplyMode::Set,
        }
    }

    pub fn apply(self, data: &mut [u8]) {
        match self.mode {
            ApplyMode::Or => data[self.offset] |= self.value,
            ApplyMode::Set => data[self.offset] = self.value,
        }
    }
}

/// A named unlock profile: an ordered list of edits, built once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    name: &'static str,
    edits: Vec<Edit>,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Mark normal difficulty complete and light the first Act 3
    /// waypoint in every difficulty, so the character can both start
    /// single-player games and jump straight to Act 3.
    pub fn minimal_unlock() -> Self {
        let mut edits = vec![Edit::or(PROGRESSION_OFFSET, GAME_COMPLETED_ON_NORMAL)];

        for difficulty in Difficulty::ALL {
            let block = WAYPOINTS_SECTION_OFFSET
                + WAYPOINTS_DATA_OFFSET
                + difficulty.index() * WAYPOINTS_DIFFICULTY_STRIDE;
            edits.push(Edit::or(block + WAYPOINT_FLAG_BYTE, ACT3_FIRST_WAYPOINT));
        }

        Self {
            name: "minimal-unlock",
            edits,
        }
    }

    /// Unlock every difficulty, mark the windowed quest data complete
    /// and light the first Act 3 waypoint in every difficulty.
    pub fn full_unlock() -> Self {
        let mut edits = vec![Edit::or(PROGRESSION_OFFSET, GAME_COMPLETED_ON_NORMAL)];

        for (i, &mask) in QUEST_MASK_TABLE.iter().enumerate() {
            if mask == 0 {
                continue;
            }
            edits.push(Edit::or(QUEST_TABLE_BASE + i, mask));
        }

        for difficulty in Difficulty::ALL {
            let block = WAYPOINTS_SECTION_OFFSET
                + WAYPOINTS_DATA_OFFSET
                + difficulty.index() * WAYPOINTS_DIFFICULTY_STRIDE;
            edits.push(Edit::or(block + WAYPOINT_FLAG_BYTE, ACT3_FIRST_WAYPOINT));
        }

        Self {
            name: "full-unlock",
            edits,
        }
    }
}

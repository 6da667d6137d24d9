//! Quest records and the (difficulty, act, quest) offset arithmetic.
//!
//! The quest section stores 96 bytes per difficulty, 16 bytes per
//! act, 2 bytes per quest. The enums below multiply straight into
//! that formula, so their declaration order mirrors the on-disk
//! layout and is load-bearing, not just a label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::QUESTS_SECTION_OFFSET;

/// Written to a quest's first byte to mark it complete.
const QUEST_COMPLETE: u8 = 0x01;
/// Written to a quest's second byte so the log stops replaying the
/// completion animation.
const QUEST_LOG_VIEWED: u8 = 0x10;
/// Folded into the Prison of Ice quest byte; without it the game
/// re-grants the scroll of resistance reward.
const SCROLL_OF_RESISTANCE: u8 = 0xC0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Normal,
    Nightmare,
    Hell,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Nightmare, Difficulty::Hell];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Nightmare => "Nightmare",
            Self::Hell => "Hell",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Act {
    TheSightlessEye,
    SecretOfTheVizjerei,
    TheInfernalGate,
    TheHarrowing,
    LordOfDestruction,
}

impl Act {
    pub const ALL: [Act; 5] = [
        Act::TheSightlessEye,
        Act::SecretOfTheVizjerei,
        Act::TheInfernalGate,
        Act::TheHarrowing,
        Act::LordOfDestruction,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TheSightlessEye => "The Sightless Eye",
            Self::SecretOfTheVizjerei => "Secret of the Vizjerei",
            Self::TheInfernalGate => "The Infernal Gate",
            Self::TheHarrowing => "The Harrowing",
            Self::LordOfDestruction => "Lord of Destruction",
        }
    }
}

impl fmt::Display for Act {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a quest within its act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quest {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl Quest {
    pub const ALL: [Quest; 6] = [
        Quest::First,
        Quest::Second,
        Quest::Third,
        Quest::Fourth,
        Quest::Fifth,
        Quest::Sixth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Byte offset of a quest's record, relative to the quest section
/// start. `None` for Harrowing slots past the third quest; that act
/// only has three.
pub fn quest_offset(difficulty: Difficulty, act: Act, quest: Quest) -> Option<usize> {
    if act == Act::TheHarrowing && quest >= Quest::Fourth {
        return None;
    }

    // 10 bytes of section header plus 2 bytes of act introduction.
    let mut offset = 12;
    offset += difficulty.index() * 96;
    offset += act.index() * 16;
    offset += quest.index() * 2;

    if act == Act::LordOfDestruction {
        // The expansion act sits past four extra bytes.
        offset += 4;
    }

    Some(offset)
}

/// Mark one quest complete (or reset it) directly in the save bytes.
///
/// Completing the quest that ends an act also writes the travel flag
/// that lets the character move on: two bytes past the quest record,
/// or four for the Harrowing, whose act ends on its second quest.
///
/// The buffer must already have passed [`crate::format::is_valid`];
/// every offset written here lands inside the 765-byte header.
pub fn set_quest(data: &mut [u8], difficulty: Difficulty, act: Act, quest: Quest, complete: bool) {
    let Some(rel) = quest_offset(difficulty, act, quest) else {
        return;
    };
    let offset = QUESTS_SECTION_OFFSET + rel;

    if complete {
        data[offset] = QUEST_COMPLETE;
        data[offset + 1] = QUEST_LOG_VIEWED;

        if act == Act::LordOfDestruction && quest == Quest::Third {
            data[offset] += SCROLL_OF_RESISTANCE;
        }
    } else {
        data[offset] = 0;
        data[offset + 1] = 0;
    }

    if complete && (quest == Quest::Sixth || (act == Act::TheHarrowing && quest == Quest::Second)) {
        if act == Act::TheHarrowing {
            data[offset + 4] = 1;
        } else {
            data[offset + 2] = 1;
        }
    }
}

/// Complete whichever quest gates travel out of `act` in the given
/// difficulty.
pub fn allow_travel_to_next_act(data: &mut [u8], difficulty: Difficulty, act: Act) {
    if act == Act::TheHarrowing {
        set_quest(data, difficulty, act, Quest::Second, true);
    } else {
        set_quest(data, difficulty, act, Quest::Sixth, true);
    }
}

/// Complete Act 2 in one difficulty, opening travel to Act 3.
pub fn complete_act2(data: &mut [u8], difficulty: Difficulty) {
    allow_travel_to_next_act(data, difficulty, Act::SecretOfTheVizjerei);
}

/// Complete Act 2 in every difficulty. Not part of either unlock
/// profile; callers opt in explicitly.
pub fn complete_act2_all_difficulties(data: &mut [u8]) {
    for difficulty in Difficulty::ALL {
        complete_act2(data, difficulty);
    }
}

use d2rfix_core::format::{HEADER_LENGTH, MAGIC, MIN_VERSION, QUESTS_SECTION_OFFSET, VERSION_OFFSET};
use d2rfix_core::quest::{self, Act, Difficulty, Quest};

fn blank_save() -> Vec<u8> {
    let mut data = vec![0u8; HEADER_LENGTH];
    data[..4].copy_from_slice(&MAGIC);
    data[VERSION_OFFSET] = MIN_VERSION;
    data
}

#[test]
fn offset_formula_spot_values() {
    assert_eq!(
        quest::quest_offset(Difficulty::Normal, Act::TheSightlessEye, Quest::First),
        Some(12)
    );
    assert_eq!(
        quest::quest_offset(Difficulty::Nightmare, Act::TheSightlessEye, Quest::First),
        Some(12 + 96)
    );
    assert_eq!(
        quest::quest_offset(Difficulty::Normal, Act::TheInfernalGate, Quest::Third),
        Some(12 + 2 * 16 + 2 * 2)
    );
    // The expansion act carries four extra bytes.
    assert_eq!(
        quest::quest_offset(Difficulty::Hell, Act::LordOfDestruction, Quest::Sixth),
        Some(12 + 2 * 96 + 4 * 16 + 5 * 2 + 4)
    );
}

#[test]
fn harrowing_has_only_three_quests() {
    assert_eq!(
        quest::quest_offset(Difficulty::Normal, Act::TheHarrowing, Quest::Third),
        Some(12 + 3 * 16 + 2 * 2)
    );
    for quest in [Quest::Fourth, Quest::Fifth, Quest::Sixth] {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                quest::quest_offset(difficulty, Act::TheHarrowing, quest),
                None
            );
        }
    }
}

#[test]
fn completing_a_quest_writes_complete_and_log_bytes() {
    let mut data = blank_save();
    quest::set_quest(
        &mut data,
        Difficulty::Normal,
        Act::TheSightlessEye,
        Quest::First,
        true,
    );

    let offset = QUESTS_SECTION_OFFSET + 12;
    assert_eq!(data[offset], 0x01);
    assert_eq!(data[offset + 1], 0x10);
    // Not the act's final quest, so no travel byte.
    assert_eq!(data[offset + 2], 0x00);
}

#[test]
fn uncompleting_a_quest_zeroes_its_record() {
    let mut data = blank_save();
    quest::set_quest(
        &mut data,
        Difficulty::Normal,
        Act::TheSightlessEye,
        Quest::First,
        true,
    );
    quest::set_quest(
        &mut data,
        Difficulty::Normal,
        Act::TheSightlessEye,
        Quest::First,
        false,
    );

    let offset = QUESTS_SECTION_OFFSET + 12;
    assert_eq!(data[offset], 0x00);
    assert_eq!(data[offset + 1], 0x00);
}

#[test]
fn final_quest_of_an_act_opens_travel() {
    let mut data = blank_save();
    quest::set_quest(
        &mut data,
        Difficulty::Normal,
        Act::SecretOfTheVizjerei,
        Quest::Sixth,
        true,
    );

    let offset = QUESTS_SECTION_OFFSET + 12 + 16 + 10;
    assert_eq!(data[offset], 0x01);
    assert_eq!(data[offset + 1], 0x10);
    assert_eq!(data[offset + 2], 0x01);
}

#[test]
fn harrowing_ends_on_its_second_quest() {
    let mut data = blank_save();
    quest::set_quest(
        &mut data,
        Difficulty::Normal,
        Act::TheHarrowing,
        Quest::Second,
        true,
    );

    let offset = QUESTS_SECTION_OFFSET + 12 + 3 * 16 + 2;
    assert_eq!(data[offset], 0x01);
    assert_eq!(data[offset + 1], 0x10);
    // Travel flag sits four bytes out for this act, not two.
    assert_eq!(data[offset + 2], 0x00);
    assert_eq!(data[offset + 4], 0x01);
}

#[test]
fn prison_of_ice_keeps_its_reward_byte() {
    let mut data = blank_save();
    quest::set_quest(
        &mut data,
        Difficulty::Normal,
        Act::LordOfDestruction,
        Quest::Third,
        true,
    );

    let offset = QUESTS_SECTION_OFFSET + 12 + 4 * 16 + 2 * 2 + 4;
    assert_eq!(data[offset], 0xC1);
    assert_eq!(data[offset + 1], 0x10);
}

#[test]
fn complete_act2_all_difficulties_covers_each_tier() {
    let mut data = blank_save();
    quest::complete_act2_all_difficulties(&mut data);

    for difficulty in Difficulty::ALL {
        let offset = QUESTS_SECTION_OFFSET + 12 + difficulty.index() * 96 + 16 + 10;
        assert_eq!(data[offset], 0x01, "{difficulty}");
        assert_eq!(data[offset + 1], 0x10, "{difficulty}");
        assert_eq!(data[offset + 2], 0x01, "{difficulty}");
    }
}

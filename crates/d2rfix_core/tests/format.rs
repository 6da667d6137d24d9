use d2rfix_core::format::{self, HEADER_LENGTH, MAGIC, MIN_VERSION, VERSION_OFFSET};

fn blank_save() -> Vec<u8> {
    let mut data = vec![0u8; HEADER_LENGTH];
    data[..4].copy_from_slice(&MAGIC);
    data[VERSION_OFFSET] = MIN_VERSION;
    data
}

#[test]
fn accepts_minimal_valid_save() {
    assert!(format::is_valid(&blank_save()));
}

#[test]
fn rejects_short_buffers() {
    assert!(!format::is_valid(&[]));

    let mut data = blank_save();
    data.truncate(HEADER_LENGTH - 1);
    assert!(!format::is_valid(&data));
}

#[test]
fn rejects_wrong_magic() {
    for corrupt_index in 0..4 {
        let mut data = blank_save();
        data[corrupt_index] ^= 0xFF;
        assert!(!format::is_valid(&data), "byte {corrupt_index}");
    }
}

#[test]
fn version_boundary_is_inclusive() {
    let mut data = blank_save();

    data[VERSION_OFFSET] = MIN_VERSION - 1;
    assert!(!format::is_valid(&data));

    data[VERSION_OFFSET] = MIN_VERSION;
    assert!(format::is_valid(&data));

    data[VERSION_OFFSET] = 0xFF;
    assert!(format::is_valid(&data));
}

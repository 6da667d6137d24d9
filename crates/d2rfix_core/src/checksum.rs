//! The save file's rolling checksum.
//!
//! The game recomputes this value on load and rejects any file whose
//! stored checksum does not match, so the computation has to be
//! reproduced bit for bit. Viewed as a little-endian 32-bit value the
//! running sum is `sum = sum.rotate_left(1) + byte`, fed every byte
//! of the file with the checksum field itself cleared to zero.

/// Recompute the 4-byte checksum over the whole buffer and write the
/// result at `checksum_offset`.
///
/// The checksum field is cleared before the pass, so the result does
/// not depend on whatever checksum the file carried before. Does
/// nothing when the buffer cannot hold 4 bytes at `checksum_offset`.
pub fn recompute(data: &mut [u8], checksum_offset: usize) {
    if data.len() < checksum_offset + 4 {
        return;
    }

    data[checksum_offset..checksum_offset + 4].fill(0);

    // Four byte-sized cells plus a carry bit. Each cell doubles
    // before the cell below it folds its overflow in; that statement
    // order is what the game implements.
    let mut c: [u32; 4] = [0; 4];
    let mut carry = false;

    for i in 0..data.len() {
        let temp = u32::from(data[i]) + u32::from(carry);

        c[0] = c[0] * 2 + temp;
        c[1] *= 2;
        if c[0] > 255 {
            c[1] += c[0] / 256;
            c[0] %= 256;
        }

        c[2] *= 2;
        if c[1] > 255 {
            c[2] += c[1] / 256;
            c[1] %= 256;
        }

        c[3] *= 2;
        if c[2] > 255 {
            c[3] += c[2] / 256;
            c[2] %= 256;
        }
        c[3] %= 256;

        carry = c[3] & 0x80 != 0;
    }

    for (slot, cell) in data[checksum_offset..checksum_offset + 4]
        .iter_mut()
        .zip(c)
    {
        *slot = cell as u8;
    }
}

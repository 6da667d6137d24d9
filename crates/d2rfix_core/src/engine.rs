//! Orchestrates one patch pass: validate, edit, recompute checksum.

use serde::Serialize;

use crate::checksum;
use crate::error::{PatchError, PatchErrorCode};
use crate::format::{self, CHECKSUM_OFFSET};
use crate::policy::Policy;

/// What a successful patch did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    /// Number of policy edits written. Extra edits made through
    /// [`apply_with`]'s hook are not counted.
    pub edits_applied: usize,
    /// The recomputed checksum bytes, as written into the file.
    pub checksum: [u8; 4],
}

/// Apply an unlock profile to a save buffer in place.
///
/// Fails fast without mutating anything when the buffer is not a
/// recognized save. After validation every edit offset is known to be
/// in bounds, so the rest of the pass cannot fail.
pub fn apply(data: &mut [u8], policy: &Policy) -> Result<PatchOutcome, PatchError> {
    apply_with(data, policy, |_| {})
}

/// Like [`apply`], with a hook for extra mutations such as the quest
/// completion helpers in [`crate::quest`].
///
/// The hook runs after the policy's edits and before the checksum
/// pass, so the single checksum recomputation covers everything the
/// caller changed.
pub fn apply_with(
    data: &mut [u8],
    policy: &Policy,
    extra: impl FnOnce(&mut [u8]),
) -> Result<PatchOutcome, PatchError> {
    if !format::is_valid(data) {
        return Err(PatchError::new(
            PatchErrorCode::UnrecognizedFormat,
            "not a recognized save file (too short, bad magic, or version too old)",
        ));
    }

    for edit in policy.edits() {
        edit.apply(data);
    }
    extra(data);

    checksum::recompute(data, CHECKSUM_OFFSET);

    let mut sum = [0u8; 4];
    sum.copy_from_slice(&data[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 4]);

    Ok(PatchOutcome {
        edits_applied: policy.edits().len(),
        checksum: sum,
    })
}

use tracing::debug;

use crate::value::{Entries, Value};

/// Lower-case `key` and add it to `out`.
///
/// Keys that fold to one already present replace that entry's value in
/// place, so the output never holds two keys differing only in case.
pub(crate) fn insert_lowercased(out: &mut Entries, key: &str, value: Value) {
    let folded = key.to_ascii_lowercase();
    if out.insert(folded, value) {
        debug!(key, "case-folded key collides with an earlier key");
    }
}

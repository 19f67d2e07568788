//! Mojibake repair.
//!
//! Text that was UTF-8 on disk but got decoded as Latin-1 somewhere upstream
//! shows tell-tale pairs such as `Ã©` for `é` or `Â°` for `°`. Reversing the
//! damage is a matter of turning each char back into the byte it came from
//! and decoding those bytes as UTF-8 again.

use crate::table::{Table, Transform};

/// Characters whose presence marks a cell as a repair candidate.
pub const MOJIBAKE_TRIGGERS: [char; 4] = ['Ã', 'Â', '¢', '§'];

/// Re-decodes Latin-1-misread UTF-8 in cells containing a trigger char.
///
/// Cells without a trigger char are never touched. A candidate that does not
/// survive the round trip (a char above U+00FF, or bytes that are not valid
/// UTF-8) keeps its original value.
#[derive(Default)]
pub struct RepairMojibake {
    repaired: usize,
}

impl RepairMojibake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells repaired so far.
    pub fn repaired_count(&self) -> usize {
        self.repaired
    }
}

impl Transform for RepairMojibake {
    fn transform(&mut self, table: &mut Table) {
        self.repaired += table.map_cells(repair);
    }
}

/// Repair one value, or `None` when it is not a candidate or cannot be fixed.
pub fn repair(value: &str) -> Option<String> {
    if !value.contains(MOJIBAKE_TRIGGERS) {
        return None;
    }
    let bytes = encode_latin1(value)?;
    String::from_utf8(bytes).ok()
}

/// Encode as Latin-1, failing on any char outside U+0000..=U+00FF.
fn encode_latin1(value: &str) -> Option<Vec<u8>> {
    value.chars().map(|c| u8::try_from(c).ok()).collect()
}

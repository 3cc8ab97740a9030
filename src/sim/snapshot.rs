//! Per-step view of the resident frames.

use std::fmt;

use crate::common::PageRef;
use crate::sim::replacer::Access;

/// What the frames looked like right after one reference was processed.
///
/// `Display` renders the legacy log line:
///
/// ```text
///  4: [ 4| 2| 3|]  F
/// ```
///
/// The referenced page right-aligned in two columns, then each frame as a
/// two-column occupant (or blanks) followed by `|`, then `]`, and a trailing
/// `  F` when the reference faulted with every frame already occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub page: PageRef,
    pub frames: Vec<Option<PageRef>>,
    pub access: Access,
    /// Occupied frames after the step.
    pub resident: usize,
    /// Miss with the resident set full before this reference.
    pub fault: bool,
}

impl FrameSnapshot {
    pub fn is_hit(&self) -> bool {
        self.access.is_hit()
    }
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}: [", self.page)?;
        for frame in &self.frames {
            match frame {
                Some(page) => write!(f, "{:>2}|", page)?,
                None => f.write_str("  |")?,
            }
        }
        f.write_str("]")?;
        if self.fault {
            f.write_str("  F")?;
        }
        Ok(())
    }
}

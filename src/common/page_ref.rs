//! Page reference type.

use std::fmt;
use std::str::FromStr;

/// Identifies a page touched by one entry of a reference trace.
///
/// Using `u32` keeps identifiers non-negative by construction; the trace
/// loader rejects negative tokens instead of wrapping them.
///
/// # Example
/// ```
/// use pagesim::PageRef;
///
/// let page = PageRef::new(7);
/// assert_eq!(page.0, 7);
/// assert_eq!(format!("{}", page), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageRef(pub u32);

impl PageRef {
    /// Create a new PageRef.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageRef(id)
    }
}

impl From<u32> for PageRef {
    fn from(id: u32) -> Self {
        PageRef(id)
    }
}

impl FromStr for PageRef {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(PageRef)
    }
}

/// Renders the bare identifier so width/alignment flags pass through.
impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ref_new() {
        let page = PageRef::new(42);
        assert_eq!(page.0, 42);
        assert_eq!(PageRef::from(42), page);
    }

    #[test]
    fn test_page_ref_ordering() {
        assert!(PageRef::new(1) < PageRef::new(2));
        assert!(PageRef::new(5) > PageRef::new(3));
    }

    #[test]
    fn test_page_ref_display_respects_width() {
        assert_eq!(format!("{}", PageRef::new(42)), "42");
        assert_eq!(format!("{:>2}", PageRef::new(3)), " 3");
        assert_eq!(format!("{:>2}", PageRef::new(123)), "123");
    }

    #[test]
    fn test_page_ref_from_str() {
        assert_eq!("17".parse::<PageRef>().unwrap(), PageRef::new(17));
        assert!("-1".parse::<PageRef>().is_err());
        assert!("x".parse::<PageRef>().is_err());
    }
}

//! Reference trace loading.
//!
//! A trace file holds page numbers as whitespace-separated decimal integers:
//! ```text
//! 1 2 3 4
//! 1 2 5
//! ```
//! Line breaks carry no meaning; the whole file is one ordered trace.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::common::{Error, PageRef, Result};

/// An ordered sequence of page references, loaded once and replayed by
/// every simulation run.
///
/// # Example
/// ```
/// use pagesim::{PageRef, Trace};
///
/// let trace = Trace::parse("1 2\n3 1").unwrap();
/// assert_eq!(trace.len(), 4);
/// assert_eq!(trace.as_slice()[3], PageRef::new(1));
/// assert_eq!(trace.distinct_pages(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    refs: Vec<PageRef>,
}

impl Trace {
    /// Load a trace file.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::InvalidReference`] for any token that is not a page number.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let trace = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} references from {}", trace.len(), path.display());
        Ok(trace)
    }

    /// Read a whole trace from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse whitespace-separated page numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let refs = text
            .split_whitespace()
            .enumerate()
            .map(|(i, token)| {
                token
                    .parse::<PageRef>()
                    .map_err(|_| Error::InvalidReference {
                        position: i + 1,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { refs })
    }

    pub fn as_slice(&self) -> &[PageRef] {
        &self.refs
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Number of different pages referenced.
    pub fn distinct_pages(&self) -> usize {
        self.refs.iter().collect::<HashSet<_>>().len()
    }
}

impl FromIterator<PageRef> for Trace {
    fn from_iter<I: IntoIterator<Item = PageRef>>(iter: I) -> Self {
        Self {
            refs: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[PageRef]> for Trace {
    fn as_ref(&self) -> &[PageRef] {
        &self.refs
    }
}

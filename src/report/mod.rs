//! Capacity sweeps and the miss-rate report.
//!
//! A sweep replays one trace through every policy at each frame count of
//! `min, min + step, ..., <= max`. The report lays the results out one row
//! per policy:
//! ```text
//!
//! LRU   50.00 40.00
//! FIFO  60.00 40.00
//! Random  55.00 35.00
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::common::config::validate_capacity;
use crate::common::{Error, PageRef, Result};
use crate::sim::{MissRate, PolicyKind, Simulator, StatsSnapshot};

/// Frame counts to sweep over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub min: usize,
    pub max: usize,
    pub step: usize,
}

impl SweepConfig {
    pub fn new(min: usize, max: usize, step: usize) -> Self {
        Self { min, max, step }
    }

    /// Check the bounds and increment before any simulation runs.
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.min)?;
        validate_capacity(self.max)?;
        if self.min > self.max {
            return Err(Error::InvalidSweep(format!(
                "minimum frames {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        if self.step == 0 {
            return Err(Error::InvalidSweep(
                "the frame increment must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Frame counts visited by the sweep.
    pub fn capacities(&self) -> impl Iterator<Item = usize> {
        (self.min..=self.max).step_by(self.step.max(1))
    }
}

/// One policy's results across a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRates {
    pub kind: PolicyKind,
    /// Frame count paired with the run's statistics, in sweep order.
    pub runs: Vec<(usize, StatsSnapshot)>,
}

impl PolicyRates {
    pub fn miss_rates(&self) -> impl Iterator<Item = MissRate> + '_ {
        self.runs.iter().map(|(_, stats)| stats.miss_rate())
    }

    /// Row label, padded so the first rate column lines up for LRU and FIFO.
    fn label(&self) -> &'static str {
        match self.kind {
            PolicyKind::Lru => "LRU  ",
            PolicyKind::Fifo => "FIFO ",
            PolicyKind::Random => "Random ",
        }
    }
}

/// One-line console summary of a single run.
///
/// ```
/// use pagesim::report::describe;
/// use pagesim::{PolicyKind, StatsSnapshot};
///
/// let stats = StatsSnapshot { counted: 4, faults: 1, ..Default::default() };
/// assert_eq!(
///     describe(PolicyKind::Fifo, 3, &stats),
///     "FIFO,  3 frames: Miss rate = 1 / 4 = 25.00%"
/// );
/// ```
pub fn describe(kind: PolicyKind, capacity: usize, stats: &StatsSnapshot) -> String {
    format!("{}, {:2} frames: {}", kind, capacity, stats)
}

/// Run every policy in [`PolicyKind::ALL`] over the sweep.
pub fn sweep(trace: &[PageRef], config: &SweepConfig) -> Result<Vec<PolicyRates>> {
    config.validate()?;
    info!(
        "sweeping {} references over {}..={} frames (step {})",
        trace.len(),
        config.min,
        config.max,
        config.step
    );

    PolicyKind::ALL
        .iter()
        .map(|&kind| -> Result<PolicyRates> {
            let runs = config
                .capacities()
                .map(|capacity| -> Result<(usize, StatsSnapshot)> {
                    let mut simulator = Simulator::new(kind, capacity)?;
                    Ok((capacity, simulator.run(trace)))
                })
                .collect::<Result<Vec<_>>>()?;
            debug!("{}: {} runs", kind, runs.len());
            Ok(PolicyRates { kind, runs })
        })
        .collect()
}

/// Render the report table to `out`.
///
/// Each rate is six columns wide with two decimals; undefined rates render
/// as `n/a` in the same width.
pub fn write_report<W: Write>(rows: &[PolicyRates], mut out: W) -> Result<()> {
    writeln!(out)?;
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", row.label())?;
        for rate in row.miss_rates() {
            match rate {
                MissRate::Percent(value) => write!(out, "{:6.2}", value)?,
                MissRate::Undefined => write!(out, "{:>6}", "n/a")?,
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report_file<P: AsRef<Path>>(rows: &[PolicyRates], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_report(rows, BufWriter::new(file))?;
    info!("wrote miss-rate report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(ids: &[u32]) -> Vec<PageRef> {
        ids.iter().copied().map(PageRef::new).collect()
    }

    fn stats(counted: u64, faults: u64) -> StatsSnapshot {
        StatsSnapshot {
            counted,
            faults,
            ..StatsSnapshot::default()
        }
    }

    #[test]
    fn test_capacities_respect_step() {
        let config = SweepConfig::new(2, 9, 3);
        assert_eq!(config.capacities().collect::<Vec<_>>(), vec![2, 5, 8]);

        let single = SweepConfig::new(4, 4, 10);
        assert_eq!(single.capacities().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_validate_rejects_bad_sweeps() {
        assert!(matches!(
            SweepConfig::new(0, 5, 1).validate(),
            Err(Error::InvalidCapacity { .. })
        ));
        assert!(matches!(
            SweepConfig::new(2, 101, 1).validate(),
            Err(Error::InvalidCapacity { .. })
        ));
        assert!(matches!(
            SweepConfig::new(6, 5, 1).validate(),
            Err(Error::InvalidSweep(_))
        ));
        assert!(matches!(
            SweepConfig::new(2, 5, 0).validate(),
            Err(Error::InvalidSweep(_))
        ));
        assert!(SweepConfig::new(2, 100, 7).validate().is_ok());
    }

    #[test]
    fn test_sweep_covers_every_policy() {
        let trace = refs(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let rows = sweep(&trace, &SweepConfig::new(1, 4, 1)).unwrap();

        let kinds: Vec<_> = rows.iter().map(|row| row.kind).collect();
        assert_eq!(kinds, PolicyKind::ALL.to_vec());
        for row in &rows {
            let capacities: Vec<_> = row.runs.iter().map(|(c, _)| *c).collect();
            assert_eq!(capacities, vec![1, 2, 3, 4]);
        }

        let fifo = &rows[1];
        assert_eq!(fifo.kind, PolicyKind::Fifo);
        // Belady's trace: 3 frames fault on 6 of the 9 counted references.
        assert_eq!(fifo.runs[2].1.faults, 6);
        assert_eq!(fifo.runs[2].1.counted, 9);
    }

    #[test]
    fn test_sweep_rejects_invalid_config() {
        assert!(sweep(&refs(&[1, 2]), &SweepConfig::new(3, 2, 1)).is_err());
    }

    #[test]
    fn test_write_report_layout() {
        let rows = vec![
            PolicyRates {
                kind: PolicyKind::Lru,
                runs: vec![(2, stats(4, 2)), (3, stats(3, 1))],
            },
            PolicyRates {
                kind: PolicyKind::Fifo,
                runs: vec![(2, stats(4, 4)), (3, stats(0, 0))],
            },
            PolicyRates {
                kind: PolicyKind::Random,
                runs: vec![(2, stats(8, 1)), (3, stats(1, 1))],
            },
        ];

        let mut out = Vec::new();
        write_report(&rows, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nLRU   50.00 33.33\nFIFO 100.00   n/a\nRandom  12.50100.00"
        );
    }

    #[test]
    fn test_write_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagerates.txt");
        let rows = sweep(&refs(&[1, 2, 1, 3, 1, 4]), &SweepConfig::new(2, 2, 1)).unwrap();

        write_report_file(&rows, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("\nLRU  "));
        assert_eq!(text.lines().count(), 4);
    }
}

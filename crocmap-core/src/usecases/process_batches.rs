use super::prelude::*;
use itertools::Itertools;
use std::{fmt, time::Duration};

pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_BATCH_PAUSE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSettings {
    /// Number of records per batch
    pub size: usize,
    /// Pause between two consecutive batches
    pub pause: Duration,
    /// Only every n-th record is processed
    pub sample_every: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BATCH_SIZE,
            pause: DEFAULT_BATCH_PAUSE,
            sample_every: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub batches: usize,
    pub annotated: usize,
    pub skipped: usize,
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} records annotated, {} skipped in {} batches",
            self.annotated, self.skipped, self.batches
        )
    }
}

/// Invokes `process` for every (sampled) valid record.
///
/// Invalid records are skipped. The batches are separated
/// by a fixed pause.
pub fn process_in_batches<T, E, P, F>(
    records: &[Result<T, E>],
    settings: &BatchSettings,
    pause: &P,
    mut process: F,
) -> BatchReport
where
    E: fmt::Display,
    P: Pause + ?Sized,
    F: FnMut(&T),
{
    let size = settings.size.max(1);
    let step = settings.sample_every.max(1);
    let mut report = BatchReport::default();
    let sampled = records.iter().step_by(step).chunks(size);
    for (i, batch) in (&sampled).into_iter().enumerate() {
        if i > 0 {
            pause.pause(settings.pause);
        }
        log::debug!("Processing batch #{}", i + 1);
        for record in batch {
            match record {
                Ok(record) => {
                    process(record);
                    report.annotated += 1;
                }
                Err(err) => {
                    log::warn!("Skipping record: {err}");
                    report.skipped += 1;
                }
            }
        }
        report.batches += 1;
    }
    report
}

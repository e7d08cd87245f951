//! Wall-clock timing of analysis phases

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Sieve,
    Gaps,
    Basics,
    Stats,
    Families,
}

impl Phase {
    pub fn label(self) -> Message {
        match self {
            Self::Sieve => Message::TimeSieve,
            Self::Gaps => Message::TimeGaps,
            Self::Basics => Message::TimeBasics,
            Self::Stats => Message::TimeStats,
            Self::Families => Message::TimeFamilies,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseTiming {
    pub phase: Phase,
    #[serde(rename = "millis", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl PhaseTiming {
    pub fn millis(&self) -> f64 {
        millis(self.elapsed)
    }
}

/// Durations of each phase plus the end-to-end total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timings {
    pub phases: Vec<PhaseTiming>,
    #[serde(rename = "total_millis", serialize_with = "serialize_millis")]
    pub total: Duration,
}

impl Timings {
    pub fn total_millis(&self) -> f64 {
        millis(self.total)
    }
}

/// Measures phases one after another.
///
/// Each phase is timed around its own closure, so nothing is recorded for a
/// phase that never ran.
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
    phases: Vec<PhaseTiming>,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            phases: Vec::with_capacity(5),
        }
    }

    pub fn measure<T>(&mut self, phase: Phase, work: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let output = work();
        let elapsed = start.elapsed();
        tracing::debug!("{} took {:.4} ms", phase.label(), millis(elapsed));
        self.phases.push(PhaseTiming { phase, elapsed });
        output
    }

    pub fn finish(self) -> Timings {
        Timings {
            phases: self.phases,
            total: self.started.elapsed(),
        }
    }
}

/// Milliseconds rounded to 4 decimal places
pub fn millis(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1e7).round() / 1e4
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(millis(*duration))
}

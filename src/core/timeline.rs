use serde::{Serialize, Serializer};

use super::state::{ProcId, Ticks};
use crate::config::IDLE_PID;

/// What occupied the CPU over a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Idle,
    Process(ProcId),
}

impl Subject {
    pub fn pid(self) -> ProcId {
        match self {
            Self::Idle => IDLE_PID,
            Self::Process(id) => id,
        }
    }
}

// Consumers of the document expect a bare integer with -1 for idle
impl Serialize for Subject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.pid())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    #[serde(rename = "pid")]
    pub subject: Subject,
    pub start: Ticks,
    pub end: Ticks,
}

impl Segment {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Append-only, run-length compacted record of CPU occupancy.
///
/// A run that continues the last segment (same subject, touching end) extends
/// it in place, so no two adjacent segments ever share a subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, subject: Subject, start: Ticks, duration: Ticks) {
        if duration == 0 {
            return;
        }
        let end = start + duration;

        if let Some(last) = self.segments.last_mut() {
            debug_assert!(
                start >= last.end,
                "Segment starting at {start} overlaps previous end {}",
                last.end
            );
            if last.subject == subject && last.end == start {
                last.end = end;
                return;
            }
        }

        self.segments.push(Segment {
            subject,
            start,
            end,
        });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn last_end(&self) -> Option<Ticks> {
        self.segments.last().map(|s| s.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(t: &Timeline) -> Vec<(ProcId, Ticks, Ticks)> {
        t.segments()
            .iter()
            .map(|s| (s.subject.pid(), s.start, s.end))
            .collect()
    }

    #[test]
    fn adjacent_runs_of_same_subject_merge() {
        let mut t = Timeline::new();
        t.record(Subject::Process(1), 0, 1);
        t.record(Subject::Process(1), 1, 1);
        t.record(Subject::Process(2), 2, 3);
        t.record(Subject::Process(1), 5, 1);
        assert_eq!(spans(&t), vec![(1, 0, 2), (2, 2, 5), (1, 5, 6)]);
    }

    #[test]
    fn idle_runs_merge_like_any_subject() {
        let mut t = Timeline::new();
        t.record(Subject::Idle, 0, 2);
        t.record(Subject::Idle, 2, 3);
        assert_eq!(spans(&t), vec![(IDLE_PID, 0, 5)]);
        assert_eq!(t.segments()[0].duration(), 5);
    }

    #[test]
    fn zero_length_runs_are_dropped() {
        let mut t = Timeline::new();
        t.record(Subject::Process(3), 4, 0);
        assert!(t.segments().is_empty());
        assert_eq!(t.last_end(), None);
    }

    #[test]
    fn segment_serializes_with_pid_sentinel() {
        let seg = Segment {
            subject: Subject::Idle,
            start: 0,
            end: 3,
        };
        let json = serde_json::to_string(&seg).unwrap();
        assert_eq!(json, r#"{"pid":-1,"start":0,"end":3}"#);
    }
}

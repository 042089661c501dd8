//! Typewriter - renders text one unit per tick on a fixed cadence
//!
//! One shared implementation for every call site (hero headline, story
//! modal title). The job is an explicit state machine; the caller owns the
//! timer and calls `tick` once per period, so cancellation is just `stop`
//! and tests never need a real clock.
//!
//! States: Idle -> Running -> (Completed | Stopped), and back to Running on
//! a fresh `start`. While Running, the driver keeps exactly one pending
//! tick scheduled.

use super::surface::{Surface, VisualState};

/// Delay before the caret is removed once typing completes.
pub const CARET_GRACE_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
    Stopped,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One unit appended, more remain.
    Typed,
    /// The final unit was appended (or the text was empty); schedule the
    /// caret grace delay and then call `retire`.
    Completed,
    /// The job is not running; nothing happened.
    Inert,
}

#[derive(Debug)]
pub struct Typewriter {
    units: Vec<char>,
    index: usize,
    speed_ms: u32,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: &str, speed_ms: u32) -> Self {
        Self {
            units: text.chars().collect(),
            index: 0,
            speed_ms,
            phase: Phase::Idle,
        }
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Begin typing from index 0. Duplicate start on a running job is a
    /// silent no-op (returns false); restarting after completion or a stop
    /// is allowed.
    pub fn start<S: Surface>(&mut self, surface: &mut S) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        self.index = 0;
        self.phase = Phase::Running;
        surface.set_text("");
        surface.set_visual_state(VisualState::Caret);
        true
    }

    /// Append the next unit. The rendered content after tick `k` is always
    /// the first `k` units of the source text, in order.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Inert;
        }
        if self.index == self.units.len() {
            // Empty text: complete without typing anything.
            self.phase = Phase::Completed;
            return Tick::Completed;
        }
        self.index += 1;
        let prefix: String = self.units[..self.index].iter().collect();
        surface.set_text(&prefix);
        if self.index == self.units.len() {
            self.phase = Phase::Completed;
            Tick::Completed
        } else {
            Tick::Typed
        }
    }

    /// Halt immediately, leaving partial text in place. Safe from any
    /// state, including before `start` and after completion.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Stopped;
        }
    }

    /// Clear the caret once the grace delay has elapsed (or the job was
    /// abandoned).
    pub fn retire<S: Surface>(&self, surface: &mut S) {
        surface.set_visual_state(VisualState::NoCaret);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::surface::RecordingSurface;

    #[test]
    fn types_every_unit_in_order() {
        let mut s = RecordingSurface::new();
        let mut tw = Typewriter::new("abc", 50);
        assert!(tw.start(&mut s));
        assert_eq!(s.last_state(), Some(VisualState::Caret));

        assert_eq!(tw.tick(&mut s), Tick::Typed);
        assert_eq!(s.text, "a");
        assert_eq!(tw.tick(&mut s), Tick::Typed);
        assert_eq!(s.text, "ab");
        assert_eq!(tw.tick(&mut s), Tick::Completed);
        assert_eq!(s.text, "abc");
        assert_eq!(tw.phase(), Phase::Completed);
    }

    #[test]
    fn exactly_n_ticks_to_complete() {
        let text = "golden hour";
        let mut s = RecordingSurface::new();
        let mut tw = Typewriter::new(text, 80);
        tw.start(&mut s);

        let mut ticks = 0;
        loop {
            match tw.tick(&mut s) {
                Tick::Typed => ticks += 1,
                Tick::Completed => {
                    ticks += 1;
                    break;
                }
                Tick::Inert => panic!("job stalled"),
            }
        }
        assert_eq!(ticks, text.chars().count());
        assert_eq!(s.text, text);
    }

    #[test]
    fn stop_leaves_partial_text() {
        let mut s = RecordingSurface::new();
        let mut tw = Typewriter::new("abcdef", 50);
        tw.start(&mut s);
        tw.tick(&mut s);
        tw.tick(&mut s);
        tw.stop();

        assert_eq!(tw.phase(), Phase::Stopped);
        assert_eq!(s.text, "ab");
        assert_eq!(tw.tick(&mut s), Tick::Inert);
        assert_eq!(s.text, "ab");
    }

    #[test]
    fn duplicate_start_is_a_noop() {
        let mut s = RecordingSurface::new();
        let mut tw = Typewriter::new("abc", 50);
        assert!(tw.start(&mut s));
        tw.tick(&mut s);
        assert!(!tw.start(&mut s));
        // Trajectory unchanged: next tick continues from index 1.
        tw.tick(&mut s);
        assert_eq!(s.text, "ab");
    }

    #[test]
    fn restart_after_completion_begins_from_zero() {
        let mut s = RecordingSurface::new();
        let mut tw = Typewriter::new("hi", 50);
        tw.start(&mut s);
        tw.tick(&mut s);
        tw.tick(&mut s);
        assert_eq!(tw.phase(), Phase::Completed);

        assert!(tw.start(&mut s));
        assert_eq!(s.text, "");
        tw.tick(&mut s);
        assert_eq!(s.text, "h");
    }

    #[test]
    fn stop_is_idempotent_from_any_state() {
        let mut tw = Typewriter::new("abc", 50);
        tw.stop(); // before start
        assert_eq!(tw.phase(), Phase::Idle);

        let mut s = RecordingSurface::new();
        tw.start(&mut s);
        tw.stop();
        tw.stop(); // after stop
        assert_eq!(tw.phase(), Phase::Stopped);
    }

    #[test]
    fn empty_text_completes_without_typing() {
        let mut s = RecordingSurface::new();
        let mut tw = Typewriter::new("", 50);
        tw.start(&mut s);
        assert_eq!(tw.tick(&mut s), Tick::Completed);
        assert_eq!(s.text, "");
    }

    #[test]
    fn retire_clears_the_caret() {
        let mut s = RecordingSurface::new();
        let mut tw = Typewriter::new("a", 50);
        tw.start(&mut s);
        tw.tick(&mut s);
        tw.retire(&mut s);
        assert_eq!(s.last_state(), Some(VisualState::NoCaret));
    }
}

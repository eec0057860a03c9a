use std::time::SystemTime;

use crate::util::whole_seconds_between;

/// Options that change how keystrokes are accepted by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// refuse further input while the previous character is wrong
    pub pause_on_error: bool,
    /// number of spaces inserted for a Tab key press
    pub tab_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pause_on_error: true,
            tab_width: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    NotStarted,
    Running,
    Ended,
}

/// Start and end timestamps of a typing session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timing {
    pub started_at: Option<SystemTime>,
    pub ended_at: Option<SystemTime>,
}

impl Timing {
    /// Whole seconds between start and end, or None until both are set
    pub fn duration_secs(&self) -> Option<u64> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(whole_seconds_between(start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config_pauses_on_error_with_two_space_tabs() {
        let cfg = SessionConfig::default();
        assert!(cfg.pause_on_error);
        assert_eq!(cfg.tab_width, 2);
    }

    #[test]
    fn duration_requires_both_timestamps() {
        let start = SystemTime::UNIX_EPOCH;
        let mut timing = Timing {
            started_at: Some(start),
            ended_at: None,
        };
        assert_eq!(timing.duration_secs(), None);

        timing.ended_at = Some(start + Duration::from_millis(2_900));
        assert_eq!(timing.duration_secs(), Some(2));
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::NotStarted.to_string(), "NotStarted");
        assert_eq!(Phase::Ended.to_string(), "Ended");
    }
}

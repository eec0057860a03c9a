use std::time::SystemTime;

/// Whole seconds elapsed from `start` to `end`, floored. A clock that went
/// backwards counts as zero.
pub fn whole_seconds_between(start: SystemTime, end: SystemTime) -> u64 {
    end.duration_since(start)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Words per minute from correct characters, using the five characters per
/// word convention. Returns None when no time has elapsed.
pub fn wpm(correct_chars: usize, elapsed_secs: u64) -> Option<u64> {
    match elapsed_secs {
        0 => None,
        secs => Some(((60.0 / secs as f64) * correct_chars as f64 / 5.0).round() as u64),
    }
}

/// Share of the whole text typed correctly, in percent
pub fn accuracy(correct_chars: usize, text_len: usize) -> f64 {
    match text_len {
        0 => 0.0,
        len => (correct_chars as f64 / len as f64) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_wpm() {
        assert_eq!(wpm(10, 30), Some(4));
        assert_eq!(wpm(250, 60), Some(50));
    }

    #[test]
    fn test_wpm_rounds_to_nearest() {
        // 60/7 * 9/5 = 15.43
        assert_eq!(wpm(9, 7), Some(15));
        // 60/8 * 10/5 = 15.0
        assert_eq!(wpm(10, 8), Some(15));
    }

    #[test]
    fn test_wpm_zero_elapsed() {
        assert_eq!(wpm(10, 0), None);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(format!("{:.2}", accuracy(4, 5)), "80.00");
        assert_eq!(accuracy(3, 3), 100.0);
    }

    #[test]
    fn test_accuracy_empty_text() {
        assert_eq!(accuracy(0, 0), 0.0);
    }

    #[test]
    fn test_whole_seconds_between() {
        let start = SystemTime::UNIX_EPOCH;
        assert_eq!(
            whole_seconds_between(start, start + Duration::from_millis(30_999)),
            30
        );
        assert_eq!(
            whole_seconds_between(start + Duration::from_secs(5), start),
            0
        );
    }
}

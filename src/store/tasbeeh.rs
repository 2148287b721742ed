use serde::{Deserialize, Serialize};

pub const DEFAULT_DHIKR: &str = "سبحان الله";
pub const DEFAULT_GOAL: u32 = 33;
pub const MAX_HISTORY: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasbeehHistoryEntry {
    pub dhikr: String,
    pub count: u32,
    /// Unix milliseconds.
    pub date: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    Counted,
    GoalReached,
}

/// Counter state persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasbeehState {
    pub count: u32,
    pub dhikr: String,
    pub goal: u32,
    pub history: Vec<TasbeehHistoryEntry>,
}

impl Default for TasbeehState {
    fn default() -> Self {
        Self {
            count: 0,
            dhikr: DEFAULT_DHIKR.to_string(),
            goal: DEFAULT_GOAL,
            history: Vec::new(),
        }
    }
}

impl TasbeehState {
    /// Count one repetition. A goal of zero never fires.
    pub fn increment(&mut self) -> CounterEvent {
        self.count = self.count.saturating_add(1);
        if self.goal > 0 && self.count % self.goal == 0 {
            CounterEvent::GoalReached
        } else {
            CounterEvent::Counted
        }
    }

    /// Zero the counter, archiving a non-zero run at the front of the history.
    pub fn reset(&mut self, now_millis: i64) {
        if self.count > 0 {
            self.history.insert(
                0,
                TasbeehHistoryEntry {
                    dhikr: self.dhikr.clone(),
                    count: self.count,
                    date: now_millis,
                },
            );
            self.history.truncate(MAX_HISTORY);
        }
        self.count = 0;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn set_dhikr(&mut self, dhikr: &str) {
        let dhikr = dhikr.trim();
        self.dhikr = if dhikr.is_empty() {
            DEFAULT_DHIKR.to_string()
        } else {
            dhikr.to_string()
        };
    }

    /// Apply a typed goal; anything but a positive whole number disables it.
    pub fn set_goal(&mut self, raw: &str) {
        self.goal = raw.trim().parse::<u32>().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_is_reported_on_each_multiple() {
        let mut t = TasbeehState::default();
        let mut hits = Vec::new();
        for _ in 0..99 {
            if t.increment() == CounterEvent::GoalReached {
                hits.push(t.count);
            }
        }
        assert_eq!(hits, vec![33, 66, 99]);
    }

    #[test]
    fn reset_archives_only_non_zero_runs() {
        let mut t = TasbeehState::default();
        t.reset(1);
        assert!(t.history.is_empty());
        t.increment();
        t.increment();
        t.reset(2);
        assert_eq!(t.count, 0);
        assert_eq!(t.history.len(), 1);
        assert_eq!(t.history[0].count, 2);
        assert_eq!(t.history[0].dhikr, DEFAULT_DHIKR);
    }

    #[test]
    fn history_keeps_newest_entries() {
        let mut t = TasbeehState::default();
        for run in 0..30 {
            t.increment();
            t.reset(run);
        }
        assert_eq!(t.history.len(), MAX_HISTORY);
        assert_eq!(t.history[0].date, 29);
    }

    #[test]
    fn invalid_goal_disables_alert_and_blank_dhikr_falls_back() {
        let mut t = TasbeehState::default();
        t.set_goal(" 100 ");
        assert_eq!(t.goal, 100);
        t.set_goal("abc");
        assert_eq!(t.goal, 0);
        assert_eq!(t.increment(), CounterEvent::Counted);
        t.set_goal("-3");
        assert_eq!(t.goal, 0);
        t.set_dhikr("  ");
        assert_eq!(t.dhikr, DEFAULT_DHIKR);
        t.set_dhikr("الحمد لله");
        assert_eq!(t.dhikr, "الحمد لله");
    }
}

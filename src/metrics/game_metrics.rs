use log::info;
use std::time::Duration;

use crate::game::Tick;

/// Records kept across the sessions of one run.
///
/// Play time is counted in ticks, so it follows the game clock rather than
/// the wall clock and stops while the game over screen is up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMetrics {
    /// Ticks survived in the current session
    pub ticks: u64,
    /// Food eaten in the current session
    pub food_eaten: u32,
    /// Longest snake of any finished session
    pub best_length: usize,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_session_start(&mut self) {
        self.ticks = 0;
        self.food_eaten = 0;
    }

    pub fn on_tick(&mut self, tick: Tick) {
        self.ticks += 1;
        if let Tick::Grew { .. } = tick {
            self.food_eaten += 1;
        }
    }

    pub fn on_session_end(&mut self, final_length: usize) {
        self.games_played += 1;
        if final_length > self.best_length {
            info!(
                "new best length {} after {} ticks",
                final_length, self.ticks
            );
            self.best_length = final_length;
        }
    }

    /// Session play time as mm:ss, given the tick period
    pub fn format_time(&self, tick_interval: Duration) -> String {
        let total_secs = tick_interval.as_millis() as u64 * self.ticks / 1000;
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(250);

    #[test]
    fn test_ticks_and_food() {
        let mut metrics = GameMetrics::new();
        metrics.on_tick(Tick::Moved);
        metrics.on_tick(Tick::Grew { length: 2 });
        metrics.on_tick(Tick::Moved);
        metrics.on_tick(Tick::Grew { length: 3 });

        assert_eq!(metrics.ticks, 4);
        assert_eq!(metrics.food_eaten, 2);
    }

    #[test]
    fn test_play_time_follows_ticks() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.format_time(TICK), "00:00");

        // 4 ticks per second at 250ms
        metrics.ticks = 4 * 125;
        assert_eq!(metrics.format_time(TICK), "02:05");

        metrics.ticks = 3;
        assert_eq!(metrics.format_time(TICK), "00:00");
        assert_eq!(metrics.format_time(Duration::from_secs(1)), "00:03");
    }

    #[test]
    fn test_best_length_across_sessions() {
        let mut metrics = GameMetrics::new();

        metrics.on_session_end(7);
        metrics.on_session_start();
        metrics.on_session_end(4);
        assert_eq!(metrics.best_length, 7);
        assert_eq!(metrics.games_played, 2);

        metrics.on_session_start();
        metrics.on_session_end(12);
        assert_eq!(metrics.best_length, 12);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_session_start_resets_session_counters() {
        let mut metrics = GameMetrics::new();
        metrics.on_tick(Tick::Grew { length: 2 });
        metrics.on_session_end(2);

        metrics.on_session_start();
        assert_eq!(metrics.ticks, 0);
        assert_eq!(metrics.food_eaten, 0);
        assert_eq!(metrics.best_length, 2);
        assert_eq!(metrics.games_played, 1);
    }
}

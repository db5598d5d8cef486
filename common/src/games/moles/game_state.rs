use crate::games::session_rng::RandomSource;
use crate::log;

use super::settings::MolesSettings;

pub const HOLE_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MolesUpdate {
    Idle,
    Running,
    RoundOver { score: u32, new_best: bool },
}

#[derive(Clone, Debug)]
pub struct MolesGameState {
    settings: MolesSettings,
    active: Option<usize>,
    score: u32,
    best_score: u32,
    best_at_start: u32,
    time_left_ms: u32,
    mole_interval_ms: u32,
    mole_timer_ms: u32,
    running: bool,
}

impl MolesGameState {
    pub fn new(settings: MolesSettings, best_score: u32) -> Self {
        Self {
            settings,
            active: None,
            score: 0,
            best_score,
            best_at_start: best_score,
            time_left_ms: settings.round_seconds * 1000,
            mole_interval_ms: settings.initial_interval_ms,
            mole_timer_ms: 0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.active = None;
        self.score = 0;
        self.best_at_start = self.best_score;
        self.time_left_ms = self.settings.round_seconds * 1000;
        self.mole_interval_ms = self.settings.initial_interval_ms;
        self.mole_timer_ms = 0;
        self.running = true;
    }

    /// Advances the round clock. Each elapsed mole interval moves the mole
    /// to a random hole and shortens the next interval.
    pub fn update(&mut self, elapsed_ms: u32, rng: &mut impl RandomSource) -> MolesUpdate {
        if !self.running {
            return MolesUpdate::Idle;
        }

        let consumed = elapsed_ms.min(self.time_left_ms);
        self.time_left_ms -= consumed;
        self.mole_timer_ms += consumed;

        while self.mole_timer_ms >= self.mole_interval_ms {
            self.mole_timer_ms -= self.mole_interval_ms;
            self.active = Some(rng.index(HOLE_COUNT));
            self.mole_interval_ms = self
                .mole_interval_ms
                .saturating_sub(self.settings.interval_step_ms)
                .max(self.settings.min_interval_ms);
        }

        if self.time_left_ms == 0 {
            return self.end_round();
        }
        MolesUpdate::Running
    }

    fn end_round(&mut self) -> MolesUpdate {
        self.running = false;
        self.active = None;
        let new_best = self.score > self.best_at_start;
        log!(
            "Moles round over with score {} (best {})",
            self.score,
            self.best_score
        );
        MolesUpdate::RoundOver {
            score: self.score,
            new_best,
        }
    }

    /// Hits `index`. Only the hole holding the mole counts; the mole hides at once.
    pub fn whack(&mut self, index: usize) -> bool {
        if !self.running || self.active != Some(index) {
            return false;
        }
        self.active = None;
        self.score += 1;
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        true
    }

    pub fn reset_best_score(&mut self) {
        self.best_score = 0;
        self.best_at_start = 0;
    }

    pub fn active_hole(&self) -> Option<usize> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn seconds_left(&self) -> u32 {
        self.time_left_ms.div_ceil(1000)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::init_quiet_logger;
    use crate::games::session_rng::ScriptedRng;

    fn started(best: u32) -> MolesGameState {
        let mut state = MolesGameState::new(MolesSettings::default(), best);
        state.start();
        state
    }

    #[test]
    fn test_idle_before_start() {
        init_quiet_logger();
        let mut state = MolesGameState::new(MolesSettings::default(), 0);
        let mut rng = ScriptedRng::new(&[], &[]);
        assert_eq!(state.update(1000, &mut rng), MolesUpdate::Idle);
        assert!(!state.whack(0));
        assert_eq!(state.seconds_left(), 20);
    }

    #[test]
    fn test_mole_appears_and_interval_shrinks() {
        init_quiet_logger();
        let mut state = started(0);
        let mut rng = ScriptedRng::new(&[3, 6], &[]);

        assert_eq!(state.update(999, &mut rng), MolesUpdate::Running);
        assert_eq!(state.active_hole(), None);

        state.update(1, &mut rng);
        assert_eq!(state.active_hole(), Some(3));
        assert_eq!(state.mole_interval_ms, 950);

        state.update(950, &mut rng);
        assert_eq!(state.active_hole(), Some(6));
        assert_eq!(state.mole_interval_ms, 900);
    }

    #[test]
    fn test_interval_floor() {
        init_quiet_logger();
        let mut state = started(0);
        let mut rng = ScriptedRng::new(&[], &[]);
        state.update(15_000, &mut rng);
        assert_eq!(state.mole_interval_ms, 300);
    }

    #[test]
    fn test_whack_only_active_hole() {
        init_quiet_logger();
        let mut state = started(0);
        let mut rng = ScriptedRng::new(&[2], &[]);
        state.update(1000, &mut rng);

        assert!(!state.whack(1));
        assert!(state.whack(2));
        assert_eq!(state.score(), 1);
        assert_eq!(state.active_hole(), None);
        assert!(!state.whack(2));
    }

    #[test]
    fn test_round_ends_after_twenty_seconds() {
        init_quiet_logger();
        let mut state = started(0);
        let mut rng = ScriptedRng::new(&[4], &[]);
        state.update(1000, &mut rng);
        state.whack(4);

        assert_eq!(state.update(18_999, &mut rng), MolesUpdate::Running);
        assert_eq!(state.seconds_left(), 1);
        assert_eq!(
            state.update(5, &mut rng),
            MolesUpdate::RoundOver {
                score: 1,
                new_best: true
            }
        );
        assert!(!state.is_running());
        assert_eq!(state.active_hole(), None);
        assert_eq!(state.best_score(), 1);
    }

    #[test]
    fn test_stored_best_not_beaten() {
        init_quiet_logger();
        let mut state = started(10);
        let mut rng = ScriptedRng::new(&[], &[]);
        assert_eq!(
            state.update(20_000, &mut rng),
            MolesUpdate::RoundOver {
                score: 0,
                new_best: false
            }
        );
        assert_eq!(state.best_score(), 10);

        state.reset_best_score();
        assert_eq!(state.best_score(), 0);
    }
}

//! Application state

use arena_core::{
    config::load_roster_config, default_roster, Arena, SummaryNarrator, Tournament,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::Path;

/// Maximum lines kept in the on-screen battle log
const LOG_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Arena,
    Records,
    Tournament,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Arena, Tab::Records, Tab::Tournament, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Arena => "Arena",
            Tab::Records => "Records",
            Tab::Tournament => "Bracket",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub arena: Arena,
    pub narrator: SummaryNarrator,
    /// Roster cursor on the Arena tab
    pub selected: usize,
    pub red_corner: Option<usize>,
    pub blue_corner: Option<usize>,
    pub log: Vec<String>,
    pub tournament: Option<Tournament>,
    pub rng: ChaCha8Rng,
}

impl App {
    pub fn new() -> Self {
        // Prefer a roster file next to the binary or the crate; fall back
        // to the built-in roster so the TUI always starts.
        let roster_paths = ["config/roster.toml", "arena_tui/config/roster.toml"];
        let mut log = Vec::new();

        let bugs = roster_paths
            .iter()
            .find(|p| Path::new(p).exists())
            .and_then(|p| match load_roster_config(Path::new(p)) {
                Ok(bugs) => {
                    log.push(format!("Roster loaded from {}", p));
                    Some(bugs)
                }
                Err(e) => {
                    log.push(format!("Error in {}: {}", p, e));
                    None
                }
            })
            .unwrap_or_else(|| {
                log.push("Using built-in roster".to_string());
                default_roster()
            });

        App {
            current_tab: Tab::Arena,
            arena: Arena::from_bugs(bugs),
            narrator: SummaryNarrator,
            selected: 0,
            red_corner: None,
            blue_corner: None,
            log,
            tournament: None,
            rng: ChaCha8Rng::seed_from_u64(42),
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, idx: usize) {
        if let Some(tab) = Tab::all().get(idx) {
            self.current_tab = *tab;
        }
    }

    pub fn on_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.selected + 1 < self.arena.len() {
            self.selected += 1;
        }
    }

    /// Put the highlighted bug in the red corner
    pub fn assign_red(&mut self) {
        if self.arena.is_empty() {
            return;
        }
        self.red_corner = Some(self.selected);
        if self.blue_corner == Some(self.selected) {
            self.blue_corner = None;
        }
    }

    /// Put the highlighted bug in the blue corner
    pub fn assign_blue(&mut self) {
        if self.arena.is_empty() {
            return;
        }
        self.blue_corner = Some(self.selected);
        if self.red_corner == Some(self.selected) {
            self.red_corner = None;
        }
    }

    /// Context action for the space bar: fight on the arena tab, play a
    /// round on the bracket tab.
    pub fn on_space(&mut self) {
        match self.current_tab {
            Tab::Arena => self.fight(),
            Tab::Tournament => self.play_tournament_round(),
            _ => {}
        }
    }

    pub fn fight(&mut self) {
        let (red, blue) = match (self.red_corner, self.blue_corner) {
            (Some(red), Some(blue)) => (red, blue),
            _ => {
                self.push_log("Assign both corners first ([r] and [b])".to_string());
                return;
            }
        };

        match self.arena.fight(red, blue, &self.narrator, &mut self.rng) {
            Ok(report) => {
                let line = report.narrative.clone();
                self.push_log(line);
            }
            Err(e) => self.push_log(format!("Cannot fight: {}", e)),
        }
    }

    /// Seed a fresh single-elimination bracket from the whole roster
    pub fn start_tournament(&mut self) {
        if self.arena.len() < 2 {
            self.push_log("Need at least two bugs for a bracket".to_string());
            return;
        }
        self.tournament = Some(Tournament::new((0..self.arena.len()).collect()));
        self.push_log(format!(
            "Bracket seeded with {} bugs",
            self.arena.len()
        ));
    }

    pub fn play_tournament_round(&mut self) {
        let Some(mut tournament) = self.tournament.take() else {
            self.push_log("No bracket seeded; press [t]".to_string());
            return;
        };

        match tournament.play_round(&mut self.arena, &SummaryNarrator, &mut self.rng) {
            Ok(Some(round)) => {
                let mut line = format!("Round {}: {} matches", round.number, round.matches.len());
                if round.bye.is_some() {
                    line.push_str(", one bye");
                }
                self.push_log(line);
                if let Some(champion) = tournament.champion() {
                    let name = self.arena.entries()[champion].bug.name.clone();
                    self.push_log(format!("Champion: {}", name));
                }
            }
            Ok(None) => self.push_log("Bracket already decided".to_string()),
            Err(e) => self.push_log(format!("Bracket error: {}", e)),
        }

        self.tournament = Some(tournament);
    }

    /// Write the battle history to disk as JSON
    pub fn save_history(&mut self) {
        match self.arena.history_json() {
            Ok(json) => match fs::write("battle_history.json", json) {
                Ok(()) => self.push_log("History saved to battle_history.json".to_string()),
                Err(e) => self.push_log(format!("Save failed: {}", e)),
            },
            Err(e) => self.push_log(format!("Serialize failed: {}", e)),
        }
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        while self.log.len() > LOG_LIMIT {
            self.log.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_with_roster() {
        let app = App::new();
        assert!(!app.arena.is_empty());
        assert_eq!(app.current_tab, Tab::Arena);
    }

    #[test]
    fn test_corner_assignment_is_exclusive() {
        let mut app = App::new();
        app.assign_red();
        assert_eq!(app.red_corner, Some(0));

        // Same bug moves to blue, vacating red.
        app.assign_blue();
        assert_eq!(app.blue_corner, Some(0));
        assert_eq!(app.red_corner, None);
    }

    #[test]
    fn test_fight_requires_both_corners() {
        let mut app = App::new();
        app.assign_red();
        let battles_before = app.arena.history().len();
        app.fight();
        assert_eq!(app.arena.history().len(), battles_before);
        assert!(app.log.last().unwrap().contains("Assign both corners"));
    }

    #[test]
    fn test_fight_flow() {
        let mut app = App::new();
        app.assign_red();
        app.on_down();
        app.assign_blue();
        app.fight();
        assert_eq!(app.arena.history().len(), 1);
    }

    #[test]
    fn test_tournament_flow() {
        let mut app = App::new();
        app.start_tournament();
        assert!(app.tournament.is_some());

        // Play rounds until the bracket is decided.
        for _ in 0..10 {
            if app.tournament.as_ref().map_or(true, |t| t.is_finished()) {
                break;
            }
            app.play_tournament_round();
        }
        let tournament = app.tournament.as_ref().unwrap();
        assert!(tournament.is_finished());
        assert!(tournament.champion().is_some());
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = App::new();
        let start = app.current_tab;
        for _ in 0..Tab::all().len() {
            app.next_tab();
        }
        assert_eq!(app.current_tab, start);
        app.next_tab();
        app.prev_tab();
        assert_eq!(app.current_tab, start);
    }
}

//! Alternating-turn battle loop between two combatants.
//!
//! Each round the lead side attacks first, then the trailing side, unless the
//! first blow already ended the fight. The loop stops on a defeat or once
//! `max_rounds` rounds have been fought without one.

use serde::Serialize;

use crate::combat::combatant::Combatant;
use crate::combat::log::{BattleEvent, BattleLog};
use crate::combat::rng::{Side, TurnOrder};

pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleConfig {
    /// Rounds fought before the battle is called a draw. Zero behaves as one.
    pub max_rounds: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl BattleConfig {
    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self { max_rounds }
    }

    fn round_cap(&self) -> u32 {
        self.max_rounds.max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BattleOutcome {
    Victory { winner: Side },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Running,
    Finished(BattleOutcome),
}

#[derive(Debug)]
pub struct Battle {
    home: Combatant,
    away: Combatant,
    lead: Side,
    round: u32,
    max_rounds: u32,
    log: BattleLog,
    state: BattleState,
}

impl Battle {
    /// Takes ownership of both combatants and the log for the whole encounter.
    pub fn new(
        home: Combatant,
        away: Combatant,
        order: &mut dyn TurnOrder,
        log: BattleLog,
        config: &BattleConfig,
    ) -> Self {
        Self {
            home,
            away,
            lead: order.first_actor(),
            round: 1,
            max_rounds: config.round_cap(),
            log,
            state: BattleState::Running,
        }
    }

    pub fn lead(&self) -> Side {
        self.lead
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Fights to completion and hands back the report, including the log.
    pub fn run(mut self) -> BattleReport {
        while self.state == BattleState::Running {
            self.play_round();
        }

        let outcome = match self.state {
            BattleState::Finished(outcome) => outcome,
            BattleState::Running => BattleOutcome::Draw,
        };

        tracing::debug!(
            home = self.home.name(),
            away = self.away.name(),
            rounds = self.round,
            ?outcome,
            "battle finished"
        );

        BattleReport {
            home: self.home,
            away: self.away,
            lead: self.lead,
            outcome,
            rounds: self.round,
            log: self.log,
        }
    }

    fn play_round(&mut self) {
        let lead = self.lead;
        let trail = lead.opponent();

        let outcome = if self.execute_turn(lead) {
            Some(BattleOutcome::Victory { winner: lead })
        } else if self.execute_turn(trail) {
            Some(BattleOutcome::Victory { winner: trail })
        } else if self.round >= self.max_rounds {
            self.log.record(BattleEvent::Draw { rounds: self.round });
            Some(BattleOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => self.state = BattleState::Finished(outcome),
            None => self.round += 1,
        }
    }

    /// Returns true when the defender went down.
    fn execute_turn(&mut self, attacker: Side) -> bool {
        let round = self.round;
        let (attacker, defender, log) = match attacker {
            Side::Home => (&self.home, &mut self.away, &mut self.log),
            Side::Away => (&self.away, &mut self.home, &mut self.log),
        };

        let damage = attacker.damage();
        defender.take_damage(damage);
        log.record(BattleEvent::Attack {
            round,
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            damage,
        });

        if defender.is_alive() {
            return false;
        }

        log.record(BattleEvent::Defeat {
            round,
            winner: attacker.name().to_string(),
            loser: defender.name().to_string(),
        });
        true
    }
}

/// Result of a finished battle. Owns the final combatants and the log.
#[derive(Debug, Clone)]
pub struct BattleReport {
    home: Combatant,
    away: Combatant,
    lead: Side,
    outcome: BattleOutcome,
    rounds: u32,
    log: BattleLog,
}

impl BattleReport {
    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn winner(&self) -> Option<&Combatant> {
        match self.outcome {
            BattleOutcome::Victory { winner } => Some(self.combatant(winner)),
            BattleOutcome::Draw => None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn home(&self) -> &Combatant {
        &self.home
    }

    pub fn away(&self) -> &Combatant {
        &self.away
    }

    /// The side that acted first in every round.
    pub fn lead(&self) -> Side {
        self.lead
    }

    /// Round in which the battle ended.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn events(&self) -> &[BattleEvent] {
        self.log.events()
    }

    pub fn entries(&self) -> Vec<String> {
        self.log.entries()
    }

    pub fn into_log(self) -> BattleLog {
        self.log
    }
}

/// Builds a fresh log, runs one battle and returns its report.
pub fn run_battle(
    home: Combatant,
    away: Combatant,
    order: &mut dyn TurnOrder,
    config: &BattleConfig,
) -> BattleReport {
    Battle::new(home, away, order, BattleLog::new(), config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::points::Points;
    use crate::combat::rng::FixedOrder;

    #[test]
    fn lead_is_decided_at_construction() {
        let battle = Battle::new(
            Combatant::new("a", 10, 10),
            Combatant::new("b", 10, 10),
            &mut FixedOrder(Side::Away),
            BattleLog::new(),
            &BattleConfig::default(),
        );
        assert_eq!(battle.lead(), Side::Away);
        assert_eq!(battle.state(), BattleState::Running);
        assert_eq!(battle.combatant(Side::Home).name(), "a");
    }

    #[test]
    fn supplied_log_is_appended_to() {
        let log = BattleLog::with_capacity(8);
        let report = Battle::new(
            Combatant::new("a", 1, 10),
            Combatant::new("b", 1, 10),
            &mut FixedOrder(Side::Home),
            log,
            &BattleConfig::default(),
        )
        .run();
        let log = report.into_log();
        assert_eq!(log.len(), 2);
        assert!(log.events()[1].is_terminal());
    }

    #[test]
    fn health_is_tracked_exactly() {
        let report = run_battle(
            Combatant::new("A", 15, 20),
            Combatant::new("B", 100, 5),
            &mut FixedOrder(Side::Home),
            &BattleConfig::default(),
        );
        assert_eq!(report.winner().map(Combatant::name), Some("B"));
        assert_eq!(report.rounds(), 30);
        assert_eq!(report.home().health(), Points::ZERO);
        assert_eq!(report.away().health(), Points::whole(40));
    }

    #[test]
    fn zero_cap_behaves_as_one_round() {
        let report = run_battle(
            Combatant::new("a", 10, 0),
            Combatant::new("b", 10, 0),
            &mut FixedOrder(Side::Home),
            &BattleConfig::with_max_rounds(0),
        );
        assert_eq!(report.outcome(), BattleOutcome::Draw);
        assert_eq!(report.rounds(), 1);
        assert_eq!(report.events().len(), 3);
    }
}

//! Battle events and the append-only log that owns them.

use std::fmt;

use serde::Serialize;

use crate::combat::points::Points;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BattleEvent {
    Attack {
        round: u32,
        attacker: String,
        defender: String,
        damage: Points,
    },
    Defeat {
        round: u32,
        winner: String,
        loser: String,
    },
    Draw {
        rounds: u32,
    },
}

impl BattleEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Attack { .. })
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack {
                round,
                attacker,
                defender,
                damage,
            } => write!(f, "Round {round}: {attacker} dealt {damage} to {defender}"),
            Self::Defeat {
                round,
                winner,
                loser,
            } => write!(f, "{winner} has defeated {loser} in round {round}!"),
            Self::Draw { rounds } => {
                write!(f, "No winner after {rounds} rounds, the battle is a draw")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleLog {
    events: Vec<BattleEvent>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Rendered text entries, in order.
    pub fn entries(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_attack_and_defeat_entries() {
        let mut log = BattleLog::new();
        log.record(BattleEvent::Attack {
            round: 1,
            attacker: "A".to_string(),
            defender: "B".to_string(),
            damage: Points::whole(2),
        });
        log.record(BattleEvent::Defeat {
            round: 1,
            winner: "A".to_string(),
            loser: "B".to_string(),
        });

        assert_eq!(
            log.entries(),
            vec![
                "Round 1: A dealt 2 to B".to_string(),
                "A has defeated B in round 1!".to_string(),
            ]
        );
        assert!(log.events()[1].is_terminal());
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = BattleEvent::Attack {
            round: 3,
            attacker: "pikachu".to_string(),
            defender: "eevee".to_string(),
            damage: Points::from_tenths(55),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["kind"], "attack");
        assert_eq!(value["damage"], 5.5);
    }
}

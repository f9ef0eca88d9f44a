use serde::Serialize;

use crate::combat::points::Points;

/// One creature taking part in a battle.
///
/// Health is only lowered through [`Combatant::take_damage`], which is private
/// to the crate so that a [`Battle`](crate::combat::Battle) is the only thing
/// that can wound a combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combatant {
    name: String,
    health: Points,
    attack: u32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: i64, attack: u32) -> Self {
        Self {
            name: name.into(),
            health: Points::whole(health),
            attack,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> Points {
        self.health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    /// Outgoing damage for one turn: a tenth of the attack stat.
    pub fn damage(&self) -> Points {
        Points::from_tenths(i64::from(self.attack))
    }

    /// No floor: health may go below zero.
    pub(crate) fn take_damage(&mut self, amount: Points) {
        self.health -= amount;
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_positive()
    }
}

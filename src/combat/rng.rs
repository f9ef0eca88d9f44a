//! Turn-order deciders. A battle asks one of these which side swings first.
//!
//! The seeded decider uses SplitMix64: same seed, same sequence. Not
//! cryptographically secure.

use rand::Rng as _;
use serde::Serialize;

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }

    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}

/// Position of a combatant as handed to the battle (`home` is the first one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

pub trait TurnOrder {
    /// The side that acts first in every round.
    fn first_actor(&mut self) -> Side;
}

/// Fair coin backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinFlip;

impl TurnOrder for CoinFlip {
    fn first_actor(&mut self) -> Side {
        if rand::thread_rng().gen_bool(0.5) {
            Side::Home
        } else {
            Side::Away
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeededOrder {
    rng: Rng,
}

impl SeededOrder {
    pub fn new(seed: u64) -> Self {
        Self { rng: Rng::new(seed) }
    }
}

impl TurnOrder for SeededOrder {
    fn first_actor(&mut self) -> Side {
        if self.rng.next_bool() {
            Side::Away
        } else {
            Side::Home
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOrder(pub Side);

impl TurnOrder for FixedOrder {
    fn first_actor(&mut self) -> Side {
        self.0
    }
}

pub mod combatant;
pub mod engine;
pub mod log;
pub mod points;
pub mod rng;

pub use combatant::Combatant;
pub use engine::{
    run_battle, Battle, BattleConfig, BattleOutcome, BattleReport, BattleState,
    DEFAULT_MAX_ROUNDS,
};
pub use log::{BattleEvent, BattleLog};
pub use points::Points;
pub use rng::{CoinFlip, FixedOrder, Rng, SeededOrder, Side, TurnOrder};

//! Response payloads shared by the HTTP routes and the CLI.

use serde::{Deserialize, Serialize};

use crate::combat::{
    run_battle, BattleConfig, BattleOutcome, BattleReport, CoinFlip, Combatant, SeededOrder,
    TurnOrder,
};
use crate::data::{CreatureSource, FetchError};

pub fn health_payload() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "service": "pokebattle-api",
        "version": env!("CARGO_PKG_VERSION")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackResponse {
    pub attack: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BattleQuery {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleResponse {
    pub pokemon: [String; 2],
    pub winner: Option<String>,
    pub outcome: &'static str,
    pub first_attacker: String,
    /// Round named in the final history entry. Not advanced past the last
    /// round fought, so a defeat in round 5 reports 5.
    pub rounds: u32,
    pub history: Vec<String>,
}

impl BattleResponse {
    pub fn from_report(report: &BattleReport) -> Self {
        Self {
            pokemon: [
                report.home().name().to_string(),
                report.away().name().to_string(),
            ],
            winner: report.winner().map(|winner| winner.name().to_string()),
            outcome: match report.outcome() {
                BattleOutcome::Victory { .. } => "victory",
                BattleOutcome::Draw => "draw",
            },
            first_attacker: report.combatant(report.lead()).name().to_string(),
            rounds: report.rounds(),
            history: report.entries(),
        }
    }
}

pub async fn attack_payload(
    source: &dyn CreatureSource,
    creature: &str,
) -> Result<AttackResponse, FetchError> {
    let combatant = source.fetch_combatant(creature).await?;
    Ok(AttackResponse {
        attack: combatant.attack(),
    })
}

/// Fetches both creatures, in order, then fights them.
pub async fn battle_payload(
    source: &dyn CreatureSource,
    first: &str,
    second: &str,
    seed: Option<u64>,
    config: &BattleConfig,
) -> Result<BattleResponse, FetchError> {
    let home = source.fetch_combatant(first).await?;
    let away = source.fetch_combatant(second).await?;
    Ok(resolve_battle(home, away, seed, config))
}

/// A seed gives a reproducible turn order; without one a coin flip decides.
pub fn resolve_battle(
    home: Combatant,
    away: Combatant,
    seed: Option<u64>,
    config: &BattleConfig,
) -> BattleResponse {
    let mut order: Box<dyn TurnOrder> = match seed {
        Some(seed) => Box::new(SeededOrder::new(seed)),
        None => Box::new(CoinFlip),
    };
    let report = run_battle(home, away, order.as_mut(), config);
    BattleResponse::from_report(&report)
}

use crate::config::AppConfig;
use crate::data::PokeApiClient;
use crate::server::{self, api};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Battle,
    Attack,
}

pub const USAGE: &str = "usage: pokebattle <serve|battle|attack>";

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("battle") => Some(Command::Battle),
        Some("attack") => Some(Command::Attack),
        _ => None,
    }
}

pub async fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve().await,
        Some(Command::Battle) => handle_battle(args).await,
        Some(Command::Attack) => handle_attack(args).await,
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn load_config() -> Option<AppConfig> {
    match AppConfig::from_env() {
        Ok(config) => Some(config),
        Err(err) => {
            eprintln!("configuration error: {err}");
            None
        }
    }
}

fn build_client(config: &AppConfig) -> Option<PokeApiClient> {
    match PokeApiClient::from_config(config) {
        Ok(client) => Some(client),
        Err(err) => {
            eprintln!("failed to build upstream client: {err}");
            None
        }
    }
}

async fn handle_serve() -> i32 {
    let Some(config) = load_config() else {
        return 1;
    };
    match server::run_server(&config).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

async fn handle_battle(args: &[String]) -> i32 {
    let (Some(first), Some(second)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: pokebattle battle <first> <second> [seed]");
        return 2;
    };
    let seed = match parse_seed_arg(args.get(4)) {
        Ok(seed) => seed,
        Err(raw) => {
            eprintln!("invalid seed '{raw}': expected an unsigned integer");
            eprintln!("usage: pokebattle battle <first> <second> [seed]");
            return 2;
        }
    };
    let Some(config) = load_config() else {
        return 1;
    };
    let seed = seed.or(config.order_seed);
    let Some(client) = build_client(&config) else {
        return 1;
    };

    match api::battle_payload(&client, first, second, seed, &config.battle).await {
        Ok(payload) => print_json(&payload),
        Err(err) => {
            eprintln!("battle failed: {err}");
            1
        }
    }
}

async fn handle_attack(args: &[String]) -> i32 {
    let Some(creature) = args.get(2) else {
        eprintln!("usage: pokebattle attack <creature>");
        return 2;
    };
    let Some(config) = load_config() else {
        return 1;
    };
    let Some(client) = build_client(&config) else {
        return 1;
    };

    match api::attack_payload(&client, creature).await {
        Ok(payload) => print_json(&payload),
        Err(err) => {
            eprintln!("lookup failed: {err}");
            1
        }
    }
}

fn print_json<T: serde::Serialize>(payload: &T) -> i32 {
    match serde_json::to_string_pretty(payload) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize response: {err}");
            1
        }
    }
}

/// `Err` carries the rejected text.
fn parse_seed_arg(raw: Option<&String>) -> Result<Option<u64>, &str> {
    match raw {
        None => Ok(None),
        Some(raw) => raw.parse::<u64>().map(Some).map_err(|_| raw.as_str()),
    }
}

use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_pokebattle")
}

#[test]
fn missing_command_prints_usage() {
    let output = Command::new(bin()).output().expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: pokebattle <serve|battle|attack>"));
}

#[test]
fn unknown_command_prints_usage() {
    let output = Command::new(bin())
        .arg("tournament")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn battle_command_requires_two_creatures() {
    let output = Command::new(bin())
        .args(["battle", "pikachu"])
        .output()
        .expect("battle should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: pokebattle battle"));
}

#[test]
fn attack_command_requires_a_creature() {
    let output = Command::new(bin())
        .arg("attack")
        .output()
        .expect("attack should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: pokebattle attack"));
}

#[test]
fn battle_command_rejects_malformed_configuration() {
    let output = Command::new(bin())
        .args(["battle", "pikachu", "eevee"])
        .env("POKEBATTLE_MAX_ROUNDS", "many")
        .output()
        .expect("battle should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("POKEBATTLE_MAX_ROUNDS"));
}

#[test]
fn battle_command_rejects_malformed_seed() {
    let output = Command::new(bin())
        .args(["battle", "pikachu", "eevee", "notanumber"])
        .env("POKEBATTLE_API_BASE", "http://127.0.0.1:1")
        .output()
        .expect("battle should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid seed 'notanumber'"));
    assert!(stderr.contains("usage: pokebattle battle"));
}

use std::path::Path;
use std::process::{Command, Output};

/// Low work factor so hashing does not dominate test time.
pub const TEST_BCRYPT_COST: &str = "4";

/// Run the CLI binary against an isolated data directory.
pub fn run_cli(data_dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roster"));
    cmd.args(args);
    cmd.env("ROSTER_DATA_DIR", data_dir);
    cmd.env("ROSTER_BCRYPT_COST", TEST_BCRYPT_COST);
    cmd.env_remove("ROSTER_PER_PAGE");
    cmd.env_remove("ROSTER_UNSORTED");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let output = run_cli(data_dir, args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with `--json` and parse stdout.
pub fn run_cli_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut args = args.to_vec();
    args.push("--json");
    let stdout = run_cli_success(data_dir, &args);
    serde_json::from_str(&stdout).expect("CLI did not print JSON")
}

/// Sign up a user and return its id.
pub fn signup(data_dir: &Path, name: &str, email: &str, password: &str) -> String {
    let user = run_cli_json(
        data_dir,
        &[
            "users",
            "signup",
            "--name",
            name,
            "--email",
            email,
            "--password",
            password,
        ],
    );
    user["id"].as_str().expect("user id").to_string()
}

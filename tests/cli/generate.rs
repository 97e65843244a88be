//! Tests for `envgate generate`.

use crate::support::*;

#[test]
fn test_generate_writes_secrets_document() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t.generate();
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 7 entries");

    assert_eq!(t.secrets(), SAMPLE_SECRETS);
}

#[test]
fn test_generate_quoted_openai_key() {
    let t = Test::with_env("OPENAI_API_KEY=\"sk-test123\"\n");

    assert_success(&t.generate());
    assert_eq!(t.secrets(), "OPENAI_API_KEY = \"sk-test123\"\n");
}

#[test]
fn test_generate_skips_comments_and_malformed_lines() {
    let t = Test::with_env(NOISY_ENV);

    let output = t.generate();
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 1 entry");

    assert_eq!(t.secrets(), "VALID = \"kept\"\n");
}

#[test]
fn test_generate_preserves_order() {
    let t = Test::with_env("B=2\nA=1\nC=3\n");

    assert_success(&t.generate());
    assert_eq!(t.secrets(), "B = \"2\"\nA = \"1\"\nC = \"3\"\n");
}

#[test]
fn test_generate_is_byte_identical_across_runs() {
    let t = Test::with_env(SAMPLE_ENV);

    assert_success(&t.generate());
    let first = std::fs::read(t.secrets_path()).unwrap();
    assert_success(&t.generate());
    let second = std::fs::read(t.secrets_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_overwrites_previous_document() {
    let t = Test::with_env("FIRST=1\nSECOND=2\n");
    assert_success(&t.generate());

    t.write_env("THIRD=3\n");
    assert_success(&t.generate());

    assert_eq!(t.secrets(), "THIRD = \"3\"\n");
}

#[test]
fn test_generate_empty_env_warns() {
    let t = Test::with_env("# nothing here\n");

    let output = t.generate();
    assert_success(&output);
    assert_stderr_contains(&output, "no KEY=VALUE entries");
    assert_eq!(t.secrets(), "");
}

#[test]
fn test_generate_custom_paths() {
    let t = Test::new();
    std::fs::write(t.dir.path().join("prod.env"), "MODE=prod\n").unwrap();

    let output = t
        .cmd()
        .args(["generate", "--env", "prod.env", "--secrets", "out/app.toml"])
        .output()
        .unwrap();
    assert_success(&output);

    let written = std::fs::read_to_string(t.dir.path().join("out/app.toml")).unwrap();
    assert_eq!(written, "MODE = \"prod\"\n");
}

#[test]
fn test_generate_paths_from_config_file() {
    let t = Test::new();
    std::fs::write(
        t.dir.path().join("envgate.toml"),
        "[paths]\nenv_file = \"conf/app.env\"\nsecrets_file = \"conf/secrets.toml\"\n",
    )
    .unwrap();
    std::fs::create_dir(t.dir.path().join("conf")).unwrap();
    std::fs::write(t.dir.path().join("conf/app.env"), "FROM_CONFIG=yes\n").unwrap();

    assert_success(&t.generate());

    let written = std::fs::read_to_string(t.dir.path().join("conf/secrets.toml")).unwrap();
    assert_eq!(written, "FROM_CONFIG = \"yes\"\n");
}

#[test]
fn test_generate_dir_flag() {
    let t = Test::with_env("A=1\n");
    let elsewhere = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .current_dir(elsewhere.path())
        .arg("--dir")
        .arg(t.dir.path())
        .arg("generate")
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(t.secrets(), "A = \"1\"\n");
    assert!(!elsewhere.path().join(".streamlit").exists());
}

#[test]
fn test_generate_skips_lines_with_invalid_utf8() {
    let t = Test::new();
    std::fs::write(
        t.dir.path().join(".env"),
        b"# caf\xE9\nOPENAI_API_KEY=sk-1\nLATIN1=\xE9t\xE9\n",
    )
    .unwrap();

    let output = t.generate();
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 1 entry");

    assert_eq!(t.secrets(), "OPENAI_API_KEY = \"sk-1\"\n");
}

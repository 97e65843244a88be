//! Tests for `envgate show`.

use crate::support::*;

#[test]
fn test_show_redacts_api_keys() {
    let t = Test::with_env(SAMPLE_ENV);
    assert_success(&t.generate());

    let output = t.show();
    assert_success(&output);

    assert_stdout_contains(&output, "OPENAI_API_KEY = \"REDACTED\"");
    assert_stdout_contains(&output, "PINECONE_API_KEY = \"REDACTED\"");
    assert_stdout_contains(&output, "PINECONE_INDEX_NAME = \"codebase-rag\"");
    assert_stdout_contains(&output, "LLM_PROVIDER = \"groq\"");
    for secret in SAMPLE_SECRET_VALUES {
        assert_output_excludes(&output, secret);
    }
}

#[test]
fn test_show_does_not_modify_document() {
    let t = Test::with_env(SAMPLE_ENV);
    assert_success(&t.generate());

    assert_success(&t.show());

    assert_eq!(t.secrets(), SAMPLE_SECRETS);
}

#[test]
fn test_show_redacts_hand_written_document() {
    let t = Test::new();
    std::fs::create_dir_all(t.dir.path().join(".streamlit")).unwrap();
    std::fs::write(
        t.secrets_path(),
        "# managed elsewhere\nFOO_API_KEY = \"secret123\"\nBAR=\"plain\"\n",
    )
    .unwrap();

    let output = t.show();
    assert_success(&output);

    assert_eq!(
        stdout(&output),
        "# managed elsewhere\nFOO_API_KEY = \"REDACTED\"\nBAR=\"plain\"\n"
    );
}

#[test]
fn test_show_json() {
    let t = Test::with_env("GROQ_API_KEY=gsk-abc\nLLM_PROVIDER=groq\n");
    assert_success(&t.generate());

    let output = t.cmd().args(["show", "--json"]).output().unwrap();
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "key": "GROQ_API_KEY", "value": "REDACTED" },
            { "key": "LLM_PROVIDER", "value": "groq" },
        ])
    );
    assert_output_excludes(&output, "gsk-abc");
}

#[test]
fn test_show_without_document_fails() {
    let t = Test::new();

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "secrets document not found");
    assert_stderr_contains(&output, "envgate generate");
}

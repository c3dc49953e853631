use clap::CommandFactory;
use deskfs::config::DeskfsConfig;
use deskfs::tooling::cli::{Cli, CliContext, Commands, SnapshotCommands};
use tempfile::TempDir;

fn ephemeral_context() -> CliContext {
    CliContext::new(DeskfsConfig::default(), true).unwrap()
}

fn exec(cli: &CliContext, lines: &[&str]) -> String {
    cli.execute(&Commands::Exec {
        lines: lines.iter().map(|line| line.to_string()).collect(),
    })
    .unwrap()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn ls_json_contract_has_required_fields() {
    let cli = ephemeral_context();
    exec(&cli, &["mkdir /music", "touch /notes.txt", "write /notes.txt abc"]);

    let output = cli
        .execute(&Commands::Ls {
            path: Some("/".to_string()),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "music");
    assert_eq!(entries[0]["type"], "directory");
    assert_eq!(entries[1]["type"], "text");
    assert_eq!(entries[1]["size"], 3);
    assert!(entries[1].get("modified_at").and_then(|v| v.as_str()).is_some());
}

#[test]
fn info_json_contract_has_required_fields() {
    let cli = ephemeral_context();
    exec(&cli, &["touch /a.txt"]);
    let output = cli
        .execute(&Commands::Info {
            path: "/a.txt".to_string(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["name"], "a.txt");
    assert_eq!(parsed["type"], "text");
    assert_eq!(parsed["size"], 0);
    assert!(parsed.get("created_at").and_then(|v| v.as_str()).is_some());
    assert!(parsed.get("modified_at").and_then(|v| v.as_str()).is_some());
}

#[test]
fn exported_snapshot_is_tagged_by_kind() {
    let cli = ephemeral_context();
    exec(&cli, &["mkdir /docs", "touch /docs/readme.md", "cd /docs"]);
    let output = cli
        .execute(&Commands::Snapshot {
            command: SnapshotCommands::Export { output: None },
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["version"], 1);
    assert_eq!(parsed["cwd"], "/docs");
    let nodes = parsed["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["kind"], "directory");
    assert_eq!(nodes[0]["name"], "/");
    assert!(nodes[0].get("parent").is_none());
    let docs = &nodes[1];
    assert_eq!(docs["kind"], "directory");
    assert_eq!(docs["parent"], nodes[0]["id"]);
    let readme = &nodes[2];
    assert_eq!(readme["kind"], "file");
    assert_eq!(readme["parent"], docs["id"]);
    assert_eq!(readme["name"], "readme.md");
    assert_eq!(readme["file_type"], "text");
    assert_eq!(readme["content"], "");
    assert!(readme["metadata"].get("created_at").is_some());
}

#[test]
fn import_rejects_invalid_snapshot_and_keeps_tree() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.json");
    std::fs::write(
        &bad,
        r#"{"version":1,"nodes":[{"kind":"file","id":0,"name":"x","metadata":{"created_at":"2024-01-01T00:00:00Z","modified_at":"2024-01-01T00:00:00Z"}}]}"#,
    )
    .unwrap();

    let cli = ephemeral_context();
    exec(&cli, &["mkdir /survivor"]);
    let result = cli.execute(&Commands::Snapshot {
        command: SnapshotCommands::Import { file: bad },
    });
    assert!(result.is_err());
    assert_eq!(exec(&cli, &["ls /"]), "survivor");
}

#[test]
fn tree_output_uses_guides() {
    let cli = ephemeral_context();
    exec(&cli, &["mkdir /a/b", "touch /a/x.txt", "touch /z.txt"]);
    let output = cli
        .execute(&Commands::Tree {
            path: Some("/".to_string()),
        })
        .unwrap();
    assert_eq!(output, "/\n├── a/\n│   ├── b/\n│   └── x.txt\n└── z.txt");
}

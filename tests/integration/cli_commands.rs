use clap::Parser;
use commitly::config::CommitlyConfig;
use commitly::error::ApiError;
use commitly::tooling::cli::{Cli, CliContext, Commands};
use std::fs;
use tempfile::TempDir;

use crate::integration::support::{listing, spawn_server, TestServer};

/// Start a server on its own runtime; the runtime must outlive the test body.
fn start<F>(handler: F) -> (tokio::runtime::Runtime, TestServer)
where
    F: Fn(&crate::integration::support::Recorded) -> (u16, String) + Send + Sync + 'static,
{
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(spawn_server(handler));
    (rt, server)
}

fn context(server: &TestServer) -> CliContext {
    let mut config = CommitlyConfig::default();
    config.service.api_url = server.url();
    config.service.token = Some("cli-token".to_string());
    config.service.timeout_secs = 5;
    CliContext::new(config).unwrap()
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["commitly", "files", "repo-1"],
        vec!["commitly", "files", "repo-1", "--expand", "src", "--expand", "docs"],
        vec!["commitly", "files", "repo-1", "--expand-all", "--format", "json"],
        vec!["commitly", "show", "repo-1", "src/main.rs"],
        vec!["commitly", "save", "repo-1", "notes.md", "--from", "./notes.md"],
        vec![
            "commitly",
            "--api-url",
            "http://localhost:4000",
            "--log-level",
            "debug",
            "files",
            "repo-1",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_invocations() {
    assert!(Cli::try_parse_from(["commitly", "files"]).is_err());
    assert!(Cli::try_parse_from(["commitly", "save", "repo-1", "a.md"]).is_err());
    assert!(Cli::try_parse_from([
        "commitly",
        "files",
        "repo-1",
        "--expand",
        "src",
        "--expand-all"
    ])
    .is_err());
}

#[test]
fn files_json_contract_has_required_fields() {
    let (_rt, server) = start(|_| (200, listing(&["src/main.rs", "src/util/mod.rs", "README.md"])));
    let cli = context(&server);

    let output = cli
        .execute(&Commands::Files {
            repository: "repo-1".to_string(),
            expand: vec!["src/util".to_string()],
            expand_all: false,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["state"], "ready");
    assert_eq!(parsed["repository"], "repo-1");
    assert_eq!(parsed["tree"]["file_count"], 3);
    let rows = parsed["tree"]["rows"].as_array().unwrap();
    let paths: Vec<&str> = rows.iter().map(|r| r["path"].as_str().unwrap()).collect();
    assert_eq!(
        paths,
        vec!["src", "src/util", "src/util/mod.rs", "src/main.rs", "README.md"]
    );
    assert_eq!(rows[0]["kind"], "directory");
    assert_eq!(rows[0]["expanded"], true);

    let requests = server.recorded();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer cli-token"));
}

#[test]
fn files_text_lists_top_level_and_header() {
    let (_rt, server) = start(|_| (200, listing(&["src/main.rs", "README.md"])));
    let output = context(&server)
        .execute(&Commands::Files {
            repository: "repo-1".to_string(),
            expand: Vec::new(),
            expand_all: false,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("2 files"));
    assert!(output.contains("README.md"));
    assert!(!output.contains("main.rs"));
}

#[test]
fn files_fetch_failure_is_an_error() {
    let (_rt, server) = start(|_| (500, "{}".to_string()));
    let result = context(&server).execute(&Commands::Files {
        repository: "repo-1".to_string(),
        expand: Vec::new(),
        expand_all: true,
        format: "text".to_string(),
    });
    match result {
        Err(ApiError::Fetch(message)) => assert_eq!(message, "Failed to load files"),
        other => panic!("expected fetch error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn files_rejects_unknown_format() {
    let (_rt, server) = start(|_| (200, listing(&[])));
    let result = context(&server).execute(&Commands::Files {
        repository: "repo-1".to_string(),
        expand: Vec::new(),
        expand_all: false,
        format: "yaml".to_string(),
    });
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn show_prints_file_content() {
    let (_rt, server) = start(|_| (200, listing(&["src/main.rs"])));
    let output = context(&server)
        .execute(&Commands::Show {
            repository: "repo-1".to_string(),
            path: "src/main.rs".to_string(),
        })
        .unwrap();
    assert!(output.contains("content of src/main.rs"));
    assert!(output.contains("rust"));

    let missing = context(&server).execute(&Commands::Show {
        repository: "repo-1".to_string(),
        path: "src/nope.rs".to_string(),
    });
    assert!(matches!(missing, Err(ApiError::InvalidInput(_))));
}

#[test]
fn save_posts_local_file_and_lists_refreshed_tree() {
    let (_rt, server) = start(|request| {
        if request.method == "POST" {
            (201, "{}".to_string())
        } else {
            (200, listing(&["docs/guide.md"]))
        }
    });
    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("guide.md");
    fs::write(&local, "# Guide\n").unwrap();

    let output = context(&server)
        .execute(&Commands::Save {
            repository: "repo-1".to_string(),
            path: "docs/guide.md".to_string(),
            from: local,
        })
        .unwrap();
    assert!(output.contains("guide.md"));

    let requests = server.recorded();
    let methods: Vec<&str> = requests.iter().map(|r| r.method.as_str()).collect();
    assert_eq!(methods, vec!["GET", "POST", "GET"]);
    let body: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
    assert_eq!(body["fileName"], "guide.md");
    assert_eq!(body["content"], "# Guide\n");
}

#[test]
fn save_is_not_sent_when_listing_fails() {
    let (_rt, server) = start(|request| {
        if request.method == "POST" {
            (201, "{}".to_string())
        } else {
            (401, r#"{"message":"no"}"#.to_string())
        }
    });
    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("guide.md");
    fs::write(&local, "# Guide\n").unwrap();

    let result = context(&server).execute(&Commands::Save {
        repository: "repo-1".to_string(),
        path: "docs/guide.md".to_string(),
        from: local,
    });
    assert!(matches!(result, Err(ApiError::Fetch(_))));

    let methods: Vec<String> = server.recorded().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["GET"]);
}

#[test]
fn save_into_empty_repository_is_allowed() {
    let (_rt, server) = start(|request| {
        if request.method == "POST" {
            (201, "{}".to_string())
        } else {
            (200, listing(&[]))
        }
    });
    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("notes.md");
    fs::write(&local, "hello").unwrap();

    let result = context(&server).execute(&Commands::Save {
        repository: "repo-1".to_string(),
        path: "notes.md".to_string(),
        from: local,
    });
    assert!(result.unwrap().contains("No files"));

    let methods: Vec<String> = server.recorded().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["GET", "POST", "GET"]);
}

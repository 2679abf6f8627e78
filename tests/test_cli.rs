use clap::Parser;
use notepad::cli::args::{Args, Command, ThemeMode};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notepad", "--base-url", "http://localhost"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_without_search_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notepad", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { search, json } => {
            assert_eq!(search, None);
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.base_url, None);
}

#[test]
fn given_list_command_with_search_and_json_when_parsing_then_succeeds() {
    let args = vec!["notepad", "list", "groceries", "--json"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::List { search, json } => {
            assert_eq!(search.as_deref(), Some("groceries"));
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_create_command_when_parsing_then_reads_title_and_content() {
    // Arrange
    let args = vec!["notepad", "create", "--title", "Shopping", "-C", "milk"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Create {
            title,
            content,
            json,
        } => {
            assert_eq!(title, "Shopping");
            assert_eq!(content, "milk");
            assert!(!json);
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn given_create_command_without_title_when_parsing_then_fails() {
    let args = vec!["notepad", "create", "--content", "milk"];

    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_update_command_when_parsing_then_succeeds() {
    let args = vec!["notepad", "update", "42", "-t", "New", "--content", "text"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Update {
            note_id,
            title,
            content,
            ..
        } => {
            assert_eq!(note_id, 42);
            assert_eq!(title, "New");
            assert_eq!(content, "text");
        }
        _ => panic!("Expected Update command"),
    }
}

#[test]
fn given_delete_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notepad", "delete", "5"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id } => {
            assert_eq!(note_id, 5);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_non_numeric_note_id_when_parsing_delete_then_fails() {
    let args = vec!["notepad", "delete", "abc"];

    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "notepad",
        "delete",
        "7",
        "-c",
        "/path/to/config.toml",
        "--base-url",
        "http://localhost:3000",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(
        parsed.config,
        Some(std::path::PathBuf::from("/path/to/config.toml"))
    );
    assert_eq!(parsed.base_url.as_deref(), Some("http://localhost:3000"));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_theme_command_when_parsing_then_reads_optional_mode() {
    let parsed = Args::try_parse_from(vec!["notepad", "theme", "toggle"]).unwrap();
    match parsed.command {
        Command::Theme { mode } => assert_eq!(mode, Some(ThemeMode::Toggle)),
        _ => panic!("Expected Theme command"),
    }

    let parsed = Args::try_parse_from(vec!["notepad", "theme"]).unwrap();
    match parsed.command {
        Command::Theme { mode } => assert_eq!(mode, None),
        _ => panic!("Expected Theme command"),
    }
}

#[test]
fn given_unknown_theme_mode_when_parsing_then_fails() {
    assert!(Args::try_parse_from(vec!["notepad", "theme", "sepia"]).is_err());
}

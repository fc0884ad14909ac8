use crate::helpers::*;

#[test]
fn valid_pair_is_echoed_and_exits_with_success() {
    let output = run_with_input("Alice\nalice@example.com\n");
    let stdout = stdout_of(&output);

    assert_eq!(Some(0), output.status.code());
    assert!(stdout.contains("Received data: Name - Alice, Email - alice@example.com\n"));
    assert_eq!(stdout.matches(RESULT_PREFIX).count(), 1);
    assert!(stdout.contains("Data collection completed successfully!"));
}

#[test]
fn welcome_and_header_come_before_the_first_prompt() {
    let stdout = stdout_of(&run_with_input("Alice\nalice@example.com\n"));

    let welcome = stdout
        .find("Welcome to the Data Collection Script!")
        .expect("missing welcome");
    let header = stdout.find("DATA COLLECTION").expect("missing header");
    let prompt = stdout.find("Enter your Name: ").expect("missing prompt");
    assert!(welcome < header && header < prompt);
}

#[test]
fn echoed_values_are_trimmed() {
    let stdout = stdout_of(&run_with_input("   Alice  \n\t alice@example.com \n"));

    assert!(stdout.contains("Received data: Name - Alice, Email - alice@example.com\n"));
}

#[test]
fn invalid_attempts_are_reprompted_until_a_valid_pair() {
    let input = "   \n\nAlice\nno-at-symbol\nBob\n\nBob\n@\n";
    let output = run_with_input(input);
    let stdout = stdout_of(&output);

    assert_eq!(Some(0), output.status.code());
    assert_eq!(stdout.matches("Name cannot be empty").count(), 2);
    assert_eq!(stdout.matches("Email must contain '@' symbol").count(), 1);
    assert_eq!(stdout.matches("Email cannot be empty").count(), 1);
    assert_eq!(stdout.matches("Enter your Name: ").count(), 5);
    assert!(stdout.contains("Received data: Name - Bob, Email - @\n"));
}

#[test]
fn closed_input_exits_with_failure() {
    let invalid_data = vec![
        (String::from(""), String::from("no input at all")),
        (String::from("Alice\n"), String::from("missing email")),
        (String::from("Alice\nno-at-symbol\n"), String::from("invalid email")),
    ];
    for (input, description) in invalid_data {
        let output = run_with_input(&input);
        let stdout = stdout_of(&output);

        assert_eq!(
            Some(1),
            output.status.code(),
            "Run with {} did not fail",
            description
        );
        assert!(
            stdout.contains("❌ An error occurred: "),
            "Run with {} printed no error",
            description
        );
        assert!(!stdout.contains(RESULT_PREFIX));
    }
}

#[test]
fn stderr_stays_quiet_on_a_valid_run() {
    let output = run_with_input("Alice\nalice@example.com\n");

    assert!(output.stderr.is_empty());
}

#[test]
fn malformed_settings_fall_back_to_the_defaults() {
    let malformed = vec![
        ("APP_APPLICATION__BANNER_WIDTH", "abc", "non numeric width"),
        ("APP_APPLICATION__BANNER_WIDTH", "100000000000", "oversized width"),
    ];
    let default_rule = format!("\n{}\n", "=".repeat(50));
    for (key, value, description) in malformed {
        let output = run_with_env_and_input(&[(key, value)], "Alice\nalice@example.com\n");
        let stdout = stdout_of(&output);

        assert_eq!(
            Some(0),
            output.status.code(),
            "Run with {} did not succeed",
            description
        );
        assert!(stdout.contains("Received data: Name - Alice, Email - alice@example.com\n"));
        assert!(
            stdout.contains(&default_rule),
            "Run with {} did not use the default banner",
            description
        );
        assert!(stdout.lines().all(|line| line.len() <= 200));
    }
}

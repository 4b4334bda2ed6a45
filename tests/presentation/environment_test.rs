use vocalingo::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_maps_case_insensitively() {
    assert_eq!("LOCAL".parse(), Ok(Environment::Local));
    assert_eq!("development".parse(), Ok(Environment::Local));
    assert_eq!(" test ".parse(), Ok(Environment::Test));
    assert_eq!("production".parse(), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_then_lists_expected_values() {
    let error = "staging".parse::<Environment>().unwrap_err();

    assert!(error.contains("staging"));
    assert!(error.contains("local, test, or prod"));
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_appsettings_prefix() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default(), Environment::Local);
    assert_eq!(Environment::Test.to_string(), "test");
}

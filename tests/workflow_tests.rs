use anyhow::Result;
use compose_status::cli::status;
use compose_status::test_support::MockStatusSource;
use compose_status::{LocatorConfig, StatusError, StatusService};
use std::fs;
use std::sync::Arc;

fn plain_output(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("report is valid UTF-8")
}

#[test]
fn test_workflow_mixed_states() -> Result<()> {
    colored::control::set_override(false);

    // 1. Compose file in a fake home directory
    let home = tempfile::tempdir()?;
    let compose_yaml = r#"
services:
  a:
    image: alpine
  b:
    image: alpine
  c:
    image: alpine
"#;
    fs::write(home.path().join("compose.yaml"), compose_yaml)?;

    // 2. Only `a` and `c` have containers
    let mock = Arc::new(MockStatusSource::with_output(
        "a_1  Up 5 minutes\nc_1  Exited (137) 3 days ago\n",
    ));
    let service = StatusService::new(mock.clone());
    let config = LocatorConfig::new(None, home.path().to_path_buf());

    // 3. Run
    let mut out = Vec::new();
    status::run(&config, &service, &mut out)?;
    let text = plain_output(out);

    // 4. Assertions
    let body: Vec<&str> = text.lines().skip(2).take(3).collect();
    assert!(body[0].trim_start().starts_with('a') && body[0].ends_with("🟢 running"));
    assert!(body[1].trim_start().starts_with('b') && body[1].ends_with("⚪ not created"));
    assert!(body[2].trim_start().starts_with('c') && body[2].ends_with("🔴 stopped"));

    assert!(text.contains("3 services: 1 running, 1 stopped, 1 not created"));
    assert_eq!(mock.queried_dirs(), vec![home.path().to_path_buf()]);
    assert!(text.contains(&format!("cd {} && mock compose ps -a", home.path().display())));

    Ok(())
}

#[test]
fn test_workflow_empty_services_prints_frame_only() -> Result<()> {
    colored::control::set_override(false);

    let home = tempfile::tempdir()?;
    fs::write(home.path().join("docker-compose.yaml"), "services: {}\n")?;

    let mock = Arc::new(MockStatusSource::new());
    let service = StatusService::new(mock.clone());
    let config = LocatorConfig::new(None, home.path().to_path_buf());

    let mut out = Vec::new();
    status::run(&config, &service, &mut out)?;
    let text = plain_output(out);

    // title, rule, rule, summary, tip
    assert_eq!(text.lines().count(), 5);
    assert!(text.contains("0 services"));
    assert!(text.contains("docker-compose.yaml"));
    assert!(mock.queried_dirs().is_empty());

    Ok(())
}

#[test]
fn test_workflow_override_path() -> Result<()> {
    colored::control::set_override(false);

    let home = tempfile::tempdir()?;
    let stack_dir = home.path().join("stack");
    fs::create_dir(&stack_dir)?;
    let compose = stack_dir.join("services.yml");
    fs::write(&compose, "services:\n  web:\n    image: nginx\n")?;

    let mock = Arc::new(MockStatusSource::with_output("web\tCreated\tstack-web-1\n"));
    let service = StatusService::new(mock.clone());
    let config = LocatorConfig::new(Some(compose.clone()), home.path().to_path_buf());

    let mut out = Vec::new();
    status::run(&config, &service, &mut out)?;

    assert!(plain_output(out).contains("🟦 created"));
    assert_eq!(mock.queried_dirs(), vec![stack_dir]);

    Ok(())
}

#[test]
fn test_missing_compose_file_prints_nothing() {
    let home = tempfile::tempdir().unwrap();
    let service = StatusService::new(Arc::new(MockStatusSource::new()));
    let config = LocatorConfig::new(None, home.path().to_path_buf());

    let mut out = Vec::new();
    let err = status::run(&config, &service, &mut out).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<StatusError>(),
        Some(StatusError::FileNotFound { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn test_query_failure_prints_nothing() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("compose.yaml"), "services:\n  web: {}\n").unwrap();

    let service = StatusService::new(Arc::new(MockStatusSource::failing("Cannot connect")));
    let config = LocatorConfig::new(None, home.path().to_path_buf());

    let mut out = Vec::new();
    let err = status::run(&config, &service, &mut out).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<StatusError>(),
        Some(StatusError::ProcessInvocation { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn test_invalid_yaml_is_reported() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("compose.yaml"), "services: [oops\n").unwrap();

    let service = StatusService::new(Arc::new(MockStatusSource::new()));
    let config = LocatorConfig::new(None, home.path().to_path_buf());

    let err = status::run(&config, &service, &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StatusError>(),
        Some(StatusError::Parse { .. })
    ));
}

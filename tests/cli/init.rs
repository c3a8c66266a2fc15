use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r#"
success: true
exit_code: 0
----- stdout -----
✓ Created .locgenrc.json

----- stderr -----
"#);

    let config = test.read_file(".locgenrc.json")?;
    assert!(config.contains("\"outDir\": \"./src/generated\""));
    assert!(config.contains("\"namespaceSeparator\": \".\""));

    Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
    let test = CliTest::with_file(".locgenrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: .locgenrc.json already exists
"#);
    assert_eq!(test.read_file(".locgenrc.json")?, "{}");

    Ok(())
}

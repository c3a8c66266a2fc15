use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, KLONDIKE, SPIDER};

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("catalogs/klondike.json", KLONDIKE)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
success: true
exit_code: 0
----- stdout -----
✓ Checked 1 catalogs: 4 functions, no errors

----- stderr -----
"#);
    assert!(!test.root().join("src/generated").exists());

    Ok(())
}

#[test]
fn test_check_reports_errors() -> Result<()> {
    let test = CliTest::with_file("catalogs/spider.json", SPIDER)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
success: false
exit_code: 1
----- stdout -----
error: no en_GB translation to fall back to  incomplete-baseline-coverage
  --> catalogs/spider.json: key 'only_swedish'

✘ 1 problems (1 error, 0 warnings)

----- stderr -----
"#);

    Ok(())
}

#[test]
fn test_check_reports_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "catalogs/solitaire.json",
        r#"{
    "project_id": 3,
    "project_name": "Solitaire",
    "keys": [
        {
            "key_id": 1,
            "key_name": "title",
            "translations": [
                { "translation_id": 1, "language_iso": "en_GB", "translation": "Solitaire" },
                { "translation_id": 2, "language_iso": "de_DE", "translation": "Solitär" }
            ]
        }
    ]
}"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
success: true
exit_code: 0
----- stdout -----
warning: language 'de_DE' is not supported; translation skipped  unsupported-language
  --> catalogs/solitaire.json: key 'title'

✘ 1 problems (0 errors, 1 warning)
✓ Checked 1 catalogs: 1 functions, no errors

----- stderr -----
"#);

    Ok(())
}

#[test]
fn test_check_verbose_lists_catalogs() -> Result<()> {
    let test = CliTest::with_file("catalogs/klondike.json", KLONDIKE)?;
    test.write_file("catalogs/spider.json", SPIDER)?;

    assert_cmd_snapshot!(
        test.check_command().arg("--verbose").env("LOCGEN_LOG", "off"),
        @r#"
success: false
exit_code: 1
----- stdout -----
error: no en_GB translation to fall back to  incomplete-baseline-coverage
  --> catalogs/spider.json: key 'only_swedish'

✘ 1 problems (1 error, 0 warnings)
  ✓ Klondike  4 functions, 1 filtered  catalogs/klondike.json
  ✘ Spider    1 functions, 0 filtered  catalogs/spider.json

----- stderr -----
"#
    );

    Ok(())
}

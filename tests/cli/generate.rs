use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, KLONDIKE, SPIDER, stderr, stdout};

#[test]
fn test_generate_writes_module() -> Result<()> {
    let test = CliTest::with_file("catalogs/klondike.json", KLONDIKE)?;

    assert_cmd_snapshot!(test.generate_command(), @r#"
success: true
exit_code: 0
----- stdout -----
✓ Generated 4 functions from 1 catalogs into src/generated

----- stderr -----
"#);

    let source = test.read_file("src/generated/klondike.rs")?;
    assert!(source.starts_with("// @generated by locgen. Do not edit by hand.\n\n"));
    let Some(start) = source.find("pub mod klondike {") else {
        panic!("project module missing:\n{}", source);
    };
    assert_snapshot!(&source[start..], @r#"
pub mod klondike {
    use super::*;

    /// `button_name` (at most 20 characters)
    pub fn button_name(locale: Locale) -> String {
        match locale {
            Locale::EnGb => String::from("Start"),
            Locale::SvSe => String::from("Starta"),
            Locale::RuRu => self::button_name(Locale::EnGb),
        }
    }

    /// `bananas`
    pub fn bananas(count: i64, locale: Locale) -> String {
        match locale {
            Locale::EnGb => match locale.plural_category(count) {
                PluralCategory::One => String::from("One banana"),
                PluralCategory::Other => format!("{} bananas", count),
                PluralCategory::Zero | PluralCategory::Two | PluralCategory::Few | PluralCategory::Many => format!("{} bananas", count),
            },
            Locale::RuRu => match locale.plural_category(count) {
                PluralCategory::One => format!("{} банан", count),
                PluralCategory::Few => format!("{} банана", count),
                PluralCategory::Many => format!("{} бананов", count),
                PluralCategory::Zero | PluralCategory::Two | PluralCategory::Other => self::bananas(count, Locale::EnGb),
            },
            Locale::SvSe => self::bananas(count, Locale::EnGb),
        }
    }

    pub mod game {
        use super::*;

        /// `game.score`
        pub fn score(points: i64, locale: Locale) -> String {
            match locale {
                Locale::EnGb => format!("Score: {}", points),
                Locale::RuRu => format!("Счёт: {}", points),
                Locale::SvSe => self::score(points, Locale::EnGb),
            }
        }

        /// `game.player_won`
        pub fn player_won(player: &str, amount: f64, locale: Locale) -> String {
            match locale {
                Locale::EnGb => format!("{} won {} coins", player, amount),
                Locale::SvSe => format!("{} vann {} mynt", player, amount),
                Locale::RuRu => self::player_won(player, amount, Locale::EnGb),
            }
        }
    }
}
"#);

    Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<()> {
    let test = CliTest::with_file("catalogs/klondike.json", KLONDIKE)?;

    test.generate_command().output()?;
    let first = test.read_file("src/generated/klondike.rs")?;
    test.generate_command().output()?;
    let second = test.read_file("src/generated/klondike.rs")?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_generate_include_hidden() -> Result<()> {
    let test = CliTest::with_file("catalogs/klondike.json", KLONDIKE)?;

    let output = test.generate_command().arg("--include-hidden").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Generated 5 functions"));
    let source = test.read_file("src/generated/klondike.rs")?;
    assert!(source.contains("    pub mod debug {\n        use super::*;\n\n        /// `debug.secret`\n"));
    assert!(source.contains("pub fn secret(locale: Locale) -> String {"));

    Ok(())
}

#[test]
fn test_generate_out_dir_and_catalog_flags() -> Result<()> {
    let test = CliTest::with_file("lokalise/klondike.json", KLONDIKE)?;

    assert_cmd_snapshot!(
        test.generate_command()
            .args(["--catalog", "lokalise/klondike.json", "--out-dir", "gen"]),
        @r#"
success: true
exit_code: 0
----- stdout -----
✓ Generated 4 functions from 1 catalogs into gen

----- stderr -----
"#
    );
    assert!(test.root().join("gen/klondike.rs").exists());

    Ok(())
}

#[test]
fn test_generate_strict_on_build_errors() -> Result<()> {
    let test = CliTest::with_file("catalogs/klondike.json", KLONDIKE)?;
    test.write_file("catalogs/spider.json", SPIDER)?;

    assert_cmd_snapshot!(test.generate_command(), @r#"
success: false
exit_code: 1
----- stdout -----
error: no en_GB translation to fall back to  incomplete-baseline-coverage
  --> catalogs/spider.json: key 'only_swedish'

✘ 1 problems (1 error, 0 warnings)
✘ Nothing written; fix the errors above or pass --allow-partial

----- stderr -----
"#);
    assert!(!test.root().join("src/generated").exists());

    Ok(())
}

#[test]
fn test_generate_allow_partial() -> Result<()> {
    let test = CliTest::with_file("catalogs/spider.json", SPIDER)?;

    assert_cmd_snapshot!(test.generate_command().arg("--allow-partial"), @r#"
success: false
exit_code: 1
----- stdout -----
error: no en_GB translation to fall back to  incomplete-baseline-coverage
  --> catalogs/spider.json: key 'only_swedish'

✘ 1 problems (1 error, 0 warnings)
✓ Generated 1 functions from 1 catalogs into src/generated
1 keys with errors were left out

----- stderr -----
"#);

    let source = test.read_file("src/generated/spider.rs")?;
    assert!(source.contains("pub fn ok(locale: Locale) -> String {"));
    assert!(!source.contains("only_swedish"));

    Ok(())
}

#[test]
fn test_generate_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("catalogs/broken.json", "{ \"keys\": 3 }")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("error: could not load catalog: Failed to decode catalog"));
    assert!(stdout(&output).contains("  --> catalogs/broken.json"));
    assert!(!test.root().join("src/generated").exists());

    Ok(())
}

#[test]
fn test_generate_missing_catalog_path() -> Result<()> {
    let test = CliTest::new()?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.generate_command().args(["--catalog", "nope.json"]), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Catalog path not found: [ROOT]/nope.json
"#);

    Ok(())
}

#[test]
fn test_generate_uses_config() -> Result<()> {
    let test = CliTest::with_file("data/klondike.json", KLONDIKE)?;
    test.write_file(
        ".locgenrc.json",
        r#"{ "catalogs": ["data"], "outDir": "out", "namespaceSeparator": null, "indentWidth": 2 }"#,
    )?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let source = test.read_file("out/klondike.rs")?;
    assert!(source.contains("\n  pub fn game_score(points: i64, locale: Locale) -> String {\n    match locale {\n"));
    assert!(source.contains("\n  pub fn game_player_won(player: &str, amount: f64, locale: Locale) -> String {\n"));
    assert!(!source.contains("pub mod game"));

    Ok(())
}

//! The `quizforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizforge.toml").exists() {
        println!("quizforge.toml already exists, skipping.");
    } else {
        std::fs::write("quizforge.toml", SAMPLE_CONFIG)?;
        println!("Created quizforge.toml");
    }

    if std::path::Path::new("questions.txt").exists() {
        println!("questions.txt already exists, skipping.");
    } else {
        std::fs::write("questions.txt", SAMPLE_BANK)?;
        println!("Created questions.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit questions.txt (blocks separated by a line with ---)");
    println!("  2. Run: quizforge validate --input questions.txt");
    println!("  3. Run: quizforge convert --input questions.txt");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizforge configuration

output_dir = "."

[defaults]
test_name = "My Quiz Test"
duration_minutes = 60
category = "General Knowledge"
"#;

const SAMPLE_BANK: &str = "\
1
भारत की राजधानी क्या है?
मुंबई
नई दिल्ली
कोलकाता
चेन्नई
2
नई दिल्ली 1911 से भारत की राजधानी है।
---
2
Which planet is known as the Red Planet?
Venus
Jupiter
Mars
Saturn
3
Iron oxide on its surface gives Mars its colour.
---
3
What is 12 x 12?
124
144
132
154
2
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_bank_parses() {
        let records = quizforge_core::parser::parse(SAMPLE_BANK).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[2].has_placeholder_solution());
    }

    #[test]
    fn sample_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizforge.toml");
        std::fs::write(&path, SAMPLE_CONFIG).unwrap();

        let config = quizforge_core::config::load_config_from(Some(&path)).unwrap();
        assert_eq!(config.defaults.category, "General Knowledge");
    }
}

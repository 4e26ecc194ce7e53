use std::path::PathBuf;

use skinkit::services::theme_files;
use skinkit::theme::codec::ThemeDocument;
use skinkit::theme::contrast::contrast_ratio;
use skinkit::theme::validator::ThemeValidator;

fn usage() -> ! {
    eprintln!("usage: validate_theme <theme.json> [--strict] [--fix]");
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut path = None;
    let mut strict = false;
    let mut fix = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => strict = true,
            "--fix" => fix = true,
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => usage(),
        }
    }
    let Some(path) = path else { usage() };

    smol::block_on(async {
        let document = theme_files::read_document(&path).await?;
        let record = document.to_record()?;
        let validator = ThemeValidator::for_strictness(strict);
        log::info!("Checking '{}' with rules {:?}", record.name, validator.rule_names());

        println!("Theme: {}", record.name);
        println!("=============");
        for (label, fg, bg) in [
            ("primary text", record.primary_text_color, record.primary_background),
            ("secondary text", record.secondary_text_color, record.secondary_background),
            ("accent", record.accent_color, record.primary_background),
            ("border", record.border_color, record.primary_background),
        ] {
            println!("{:>16}: {:.2}:1", label, contrast_ratio(fg, bg));
        }

        let result = validator.validate_theme(&record);
        for error in &result.errors {
            println!("error: {}", error);
        }
        for warning in &result.warnings {
            println!("warning: {}", warning);
        }
        println!(
            "{} error(s), {} warning(s)",
            result.errors.len(),
            result.warnings.len()
        );

        if fix {
            let fixed = validator.auto_fix_theme(&record);
            println!("{}", ThemeDocument::from_record_advanced(&fixed).to_json()?);
        }

        if !result.is_valid() && !fix {
            std::process::exit(1);
        }
        Ok(())
    })
}

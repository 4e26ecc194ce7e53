use std::sync::Arc;

use indexmap::IndexMap;
use skinkit::theme::codec;
use skinkit::theme::inheritance::{InheritanceResolver, OverrideValue, UnknownPropertyPolicy};
use skinkit::theme::registry::SkinRegistry;
use skinkit::theme::validator::ThemeValidator;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // create_variant <base> <name> [property=value ...]
    let mut args = std::env::args().skip(1);
    let base = args.next().unwrap_or_else(|| "Dark".to_string());
    let name = args.next().unwrap_or_else(|| format!("{} Variant", base));

    let mut overrides = IndexMap::new();
    for pair in args {
        match pair.split_once('=') {
            Some((property, value)) => {
                let value = match parse_number(value) {
                    Some(number) => OverrideValue::Number(number),
                    None if value == "true" || value == "false" => {
                        OverrideValue::Bool(value == "true")
                    },
                    None => OverrideValue::from(value),
                };
                overrides.insert(property.to_string(), value);
            },
            None => log::warn!("Ignoring '{}', expected property=value", pair),
        }
    }

    let mut resolver = InheritanceResolver::with_source(Arc::new(SkinRegistry::with_builtin()))
        .with_policy(UnknownPropertyPolicy::Warn);
    let variant = resolver.create_variant(&base, &name, overrides)?;

    let Some(resolved) = resolver.get_resolved_theme(&name)? else {
        anyhow::bail!("variant '{}' did not resolve", name);
    };

    let result = ThemeValidator::strict().validate_theme(&resolved);
    for message in result.errors.iter().chain(&result.warnings) {
        log::warn!("{}", message);
    }

    println!("{}", codec::export_inheritable_theme(&variant, None, None)?);
    println!("{}", codec::export_theme(&resolved, None, None)?);
    Ok(())
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QuickstartConfig;
use crate::domain::errors::QuickstartError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file, resolving variables from the process
/// environment
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read, a `${VAR}`
/// placeholder has no value, the TOML does not parse, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use cosmos_quickstart::config::loader::load_config;
///
/// let config = load_config("quickstart.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<QuickstartConfig> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// Loads configuration from a TOML file with an explicit variable lookup
///
/// The same lookup fills `${VAR}` placeholders and supplies the
/// `QUICKSTART_LOG_LEVEL` and `COSMOS_*` overrides that
/// [`QuickstartConfig::from_lookup`] honours.
pub fn load_config_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<QuickstartConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        QuickstartError::Configuration(match e.kind() {
            ErrorKind::NotFound => format!("Configuration file not found: {}", path.display()),
            _ => format!("Failed to read configuration file {}: {e}", path.display()),
        })
    })?;

    let contents = expand_placeholders(&contents, &lookup)?;

    let mut config: QuickstartConfig = toml::from_str(&contents)
        .map_err(|e| QuickstartError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config.apply_overrides(&lookup);

    config.validate().map_err(|e| {
        QuickstartError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(path = %path.display(), "Loaded configuration file");
    Ok(config)
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Replaces `${VAR_NAME}` placeholders outside of comments
///
/// Every unset variable is reported at once, in name order.
fn expand_placeholders<F>(input: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = BTreeSet::new();
    let mut output = String::with_capacity(input.len());

    for line in input.lines() {
        let (code, comment) = split_comment(line);
        let expanded = placeholder_regex().replace_all(code, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| {
                missing.insert(caps[1].to_string());
                String::new()
            })
        });
        output.push_str(&expanded);
        output.push_str(comment);
        output.push('\n');
    }

    if !missing.is_empty() {
        let names: Vec<String> = missing.into_iter().collect();
        return Err(QuickstartError::Configuration(format!(
            "Missing required environment variables: {}",
            names.join(", ")
        )));
    }

    Ok(output)
}

/// Splits a TOML line at the first `#` that is not inside a string
fn split_comment(line: &str) -> (&str, &str) {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, ch) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if ch == '\\' => escaped = true,
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '#' => return line.split_at(index),
            None => {}
        }
    }

    (line, "")
}

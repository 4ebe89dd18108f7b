use crate::env::EnvSource;
use crate::error::{Result, SecretsError};
use std::path::Path;

/// Credentials copied into `.env`, in the order they are written.
pub const CREDENTIALS: [&str; 11] = [
    "EIA_KEY",
    "FINNHUB_API_KEY",
    "TWELVE_DATA_API_KEY",
    "HF_TOKEN",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "FMP_API_KEY",
    "ALPHAVANTAGE_API_KEY",
    "FINRA_CLIENT_ID",
    "FINRA_CLIENT_SECRET",
    "FRED_API_KEY",
];

/// Pick every name in `names` that `env` binds to a non-empty value.
///
/// Order follows `names`; absent names are skipped, not errors.
pub fn collect<E, S>(env: &E, names: &[S]) -> Vec<(String, String)>
where
    E: EnvSource + ?Sized,
    S: AsRef<str>,
{
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match env.get(name) {
                Some(value) if !value.is_empty() => Some((name.to_string(), value)),
                _ => {
                    log::trace!("{name} not set; omitting");
                    None
                }
            }
        })
        .collect()
}

/// `NAME=VALUE\n` per entry, verbatim.
pub fn render(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(name, value)| format!("{name}={value}\n"))
        .collect()
}

/// Truncate `path` and write the present credentials into it.
///
/// Returns the number of lines written.
pub fn write_env_file<E, S>(env: &E, names: &[S], path: impl AsRef<Path>) -> Result<usize>
where
    E: EnvSource + ?Sized,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let entries = collect(env, names);
    std::fs::write(path, render(&entries)).map_err(|source| SecretsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} of {} credentials to {}", entries.len(), names.len(), path.display());
    Ok(entries.len())
}

use crate::env::EnvSource;
use crate::error::Result;
use std::collections::BTreeMap;
use std::io::Write;

/// Substrings that mark a variable name as a credential. Case-sensitive.
pub const MARKERS: [&str; 4] = ["KEY", "API", "SECRET", "TOKEN"];

/// Every variable whose name contains at least one of `markers`.
pub fn filter<E, S>(env: &E, markers: &[S]) -> BTreeMap<String, String>
where
    E: EnvSource + ?Sized,
    S: AsRef<str>,
{
    env.vars()
        .into_iter()
        .filter(|(name, _)| markers.iter().any(|m| name.contains(m.as_ref())))
        .collect()
}

/// Pretty JSON, 2-space indent, one trailing newline.
pub fn to_json(secrets: &BTreeMap<String, String>) -> Result<String> {
    let mut json = serde_json::to_string_pretty(secrets)?;
    json.push('\n');
    Ok(json)
}

/// Filter `env` and write the JSON blob to `out`.
pub fn export<E, S, W>(env: &E, markers: &[S], out: &mut W) -> Result<usize>
where
    E: EnvSource + ?Sized,
    S: AsRef<str>,
    W: Write,
{
    let secrets = filter(env, markers);
    out.write_all(to_json(&secrets)?.as_bytes())?;
    out.flush()?;
    log::debug!("exported {} secrets", secrets.len());
    Ok(secrets.len())
}

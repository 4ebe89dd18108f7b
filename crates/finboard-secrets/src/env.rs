use std::collections::{BTreeMap, HashMap};

/// A named key-value source, read once at startup.
///
/// The process environment is the usual source ([`ProcessEnv`]), but any
/// map will do, which keeps the materializer & exporter deterministic in tests.
pub trait EnvSource {
    /// Look up a single variable.
    fn get(&self, name: &str) -> Option<String>;

    /// Every `(name, value)` pair in the source.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (Ok(name), Err(_)) => {
                    log::debug!("skipping {name}: value is not valid unicode");
                    None
                }
                (Err(_), _) => None,
            })
            .collect()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_sources_agree() {
        let pairs = [("A_KEY", "1"), ("B", "2")];
        let btree: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let hash: HashMap<String, String> = btree.clone().into_iter().collect();

        assert_eq!(EnvSource::get(&btree, "A_KEY"), Some("1".to_string()));
        assert_eq!(EnvSource::get(&hash, "A_KEY"), Some("1".to_string()));
        assert_eq!(EnvSource::get(&btree, "MISSING"), None);

        let mut from_hash = hash.vars();
        from_hash.sort();
        assert_eq!(btree.vars(), from_hash);
    }

    #[test]
    fn process_env_sees_path() {
        // PATH is set in every sane test runner
        let env = ProcessEnv;
        assert!(env.vars().iter().any(|(k, _)| k == "PATH"));
        assert_eq!(env.get("PATH"), std::env::var("PATH").ok());
    }
}

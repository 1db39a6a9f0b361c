use crate::Env;

/// Per-network working copies of the base environment.
///
/// Every entry starts as an independent deep copy of the same base [`Env`],
/// so mutating one network's copy never leaks into another. Entries keep the
/// order in which networks were added. A name listed twice gets two entries;
/// lookups by name return the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSet {
    entries: Vec<(String, Env)>,
}

impl EnvSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone `base` once for every network.
    pub fn replicate<I, S>(base: &Env, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for network in networks {
            set.insert(network, base.clone());
        }
        set
    }

    /// Append a copy for `network`.
    pub fn insert(&mut self, network: impl Into<String>, env: Env) {
        self.entries.push((network.into(), env));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, network: &str) -> Option<&Env> {
        self.entries
            .iter()
            .find(|(name, _)| name == network)
            .map(|(_, env)| env)
    }

    pub fn get_mut(&mut self, network: &str) -> Option<&mut Env> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == network)
            .map(|(_, env)| env)
    }

    /// Network names in insertion order.
    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Env)> {
        self.entries.iter().map(|(name, env)| (name.as_str(), env))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Env)> {
        self.entries
            .iter_mut()
            .map(|(name, env)| (name.as_str(), env))
    }
}

use composer_model::Env;

/// Read-only source of named configuration values.
///
/// Empty values are treated the same as absent ones by the resolver.
pub trait ConfigSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The parsed base environment.
impl ConfigSource for Env {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

/// Variables of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Explicit key/value pairs, mostly useful in tests.
impl ConfigSource for [(&str, &str)] {
    fn lookup(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

impl<const N: usize> ConfigSource for [(&str, &str); N] {
    fn lookup(&self, key: &str) -> Option<String> {
        self.as_slice().lookup(key)
    }
}

use std::ffi::OsString;

/// Read-only access to environment variables.
///
/// Implementors only provide [`Environment::read_os`]; the predicates build on
/// it. Tests substitute a fake environment so that they neither depend on nor
/// mutate the process environment.
pub(crate) trait Environment {
    /// Try reading the variable as an OS string.
    fn read_os(&self, key: &str) -> Option<OsString>;

    /// Determine whether the variable is set to a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }

    /// Determine whether the variable is set to exactly the given value.
    fn has_value(&self, key: &str, expected_value: &str) -> bool {
        self.read_os(key).is_some_and(|v| v == expected_value)
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env;

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}


#[cfg(test)]
pub(crate) use test::FakeEnv;

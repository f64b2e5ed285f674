use std::collections::HashMap;

use crate::RequestSource;

/// An owned set of server variables and form parameters.
#[derive(Debug, Default, Clone)]
pub struct RequestEnv {
    server: HashMap<String, String>,
    form: HashMap<String, String>,
}

impl RequestEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server variables taken from the process environment, the way a CGI
    /// server hands them to its scripts.
    pub fn from_process_env() -> Self {
        Self {
            server: std::env::vars().collect(),
            form: HashMap::new(),
        }
    }

    pub fn with_server_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.server.insert(name.into(), value.into());
        self
    }

    pub fn with_form_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(name.into(), value.into());
        self
    }
}

impl RequestSource for RequestEnv {
    fn server_var(&self, name: &str) -> Option<&str> {
        self.server.get(name).map(String::as_str)
    }

    fn form_param(&self, name: &str) -> Option<&str> {
        self.form.get(name).map(String::as_str)
    }
}

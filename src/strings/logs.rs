pub const STARTING: &str = "Starting layout assistant...";
pub const SHUTDOWN: &str = "Shutting down...";

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn config_defaulted(path: &str) -> String {
    format!("No configuration at {path}, using defaults")
}

pub fn listening(addr: &str, endpoint: &str) -> String {
    format!("Listening on http://{addr}{endpoint}")
}

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn classified(actions: usize, kinds: &str) -> String {
    format!("Classified instruction into {actions} action(s): [{kinds}]")
}

pub fn rejected(method: &str, path: &str) -> String {
    format!("Rejected {method} {path}: only POST is supported")
}

pub fn assist_panicked(err: &str) -> String {
    format!("Assist task failed: {err}")
}

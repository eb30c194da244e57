use super::schema::Config;
use tracing_subscriber::EnvFilter;

/// Validate a run configuration before any file is touched.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref input) = config.input {
        if input.as_os_str().is_empty() {
            errors.push("input: path must not be empty".to_string());
        }
    }

    if let Some(ref output) = config.output {
        if output.as_os_str().is_empty() {
            errors.push("output: path must not be empty".to_string());
        }
    }

    // Input and output must be distinct files
    if config.input_path() == config.output_path() {
        errors.push(format!(
            "output: '{}' is also the input file",
            config.output_path().display()
        ));
    }

    if let Err(e) = EnvFilter::try_new(config.log_level()) {
        errors.push(format!(
            "log_level: invalid filter '{}' - {}",
            config.log_level(),
            e
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

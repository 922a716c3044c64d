use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats a missing value as a fatal error.

    Every path below is mandatory for the application to run, so there is no
    sensible fallback: the error is logged and the process is terminated.

    # Arguments
    * `key` - Name of the environment variable to look up

    # Returns
    * `String` - The value of the environment variable

    # Panics
    Terminates the application when the variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = "Path of the TOML file holding the server configuration (storage, dashboard, chart sections)"]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = "Directory where rotating log files are written"]
pub static LOG_DIR_PATH: once_lazy<String> = once_lazy::new(|| get_env_or_panic("LOG_DIR_PATH"));

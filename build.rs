use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load build-time settings from .env when present
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, optionally quoted
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (public petstore demo API).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in [
        "PETSTORE_API_URL",
        "SESSION_STORAGE_KEY",
        "DEMO_EMAIL",
        "DEMO_PASSWORD",
        "REDIRECT_AUTHENTICATED_LOGIN",
        "LOGIN_DELAY_MS",
        "TOAST_DURATION_MS",
        "LIST_PAGE_SIZE",
        "LOG_LEVEL",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}

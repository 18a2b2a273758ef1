use std::env;
use std::fs;
use std::path::Path;

// Variables que el crate lee con option_env!
const KNOWN_KEYS: &[&str] = &[
    "STOREFRONT_API_URL",
    "STOREFRONT_LANGUAGE",
    "STOREFRONT_ENABLE_LOGGING",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE (admite comillas)
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !KNOWN_KEYS.contains(&key) {
                        continue;
                    }

                    // El entorno real tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}

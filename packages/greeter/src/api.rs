use dioxus::prelude::*;

/// Ask the server to greet `name`.
///
/// Empty names are passed through untouched, the server greets whatever it receives.
#[post("/api/greet")]
pub async fn greet(name: String) -> Result<String, ServerFnError> {
    tracing::info!(%name, "greeting requested");
    Ok(greeting_for(&name))
}

pub fn greeting_for(name: &str) -> String {
    format!("Hello, {name}!")
}

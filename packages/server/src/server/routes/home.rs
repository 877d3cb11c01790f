/// Home route: a plain-text greeting, no store access.
pub async fn home_handler() -> &'static str {
    "Hello, welcome to the Travel App!"
}

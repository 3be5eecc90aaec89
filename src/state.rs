use crate::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
}

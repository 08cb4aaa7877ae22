use std::sync::Arc;

use bartender_openai::cocktail::CocktailGenerator;
use bartender_storage::records::InteractionStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Both members are built once at startup; nothing here changes per request.
#[derive(Clone)]
pub struct AppState {
    pub generator: CocktailGenerator,
    pub store: Arc<dyn InteractionStore>,
}

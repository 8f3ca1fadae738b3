use crate::nutrition::FoodCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FoodCatalog>,
}

impl AppState {
    pub fn new(catalog: FoodCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

use franchise_core::usecases::{DbHealthUseCase, UseCases};

#[derive(Clone)]
pub struct AppState {
    pub use_cases: UseCases,
    pub db_health: DbHealthUseCase,
}

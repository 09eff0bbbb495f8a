use ecobici::prelude::*;

pub struct AppState {
    /// Stations measured from `reference`.
    pub repository: Repository,
    pub reference: Coordinate,
}

impl AppState {
    pub fn new(repository: Repository, reference: Coordinate) -> Self {
        Self {
            repository: repository.with_reference(reference),
            reference,
        }
    }
}

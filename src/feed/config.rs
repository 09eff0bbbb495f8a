use std::{path::PathBuf, sync::Arc};

/// Payload compiled into the library.
pub const EMBEDDED_STATIONS: &str = include_str!("../../data/bikes.json");

/// Where the station payload is read from.
#[derive(Debug, Default, Clone)]
pub enum Source {
    #[default]
    Embedded,
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

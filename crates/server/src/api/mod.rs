mod stations;

pub use stations::*;

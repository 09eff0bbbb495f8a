pub use crate::{
    feed::{Feed, LoadError, Source},
    repository::{Filter, MIN_RADIUS, OrderBy, Repository, Station, annotate, filter_and_sort},
    shared::geo::{Coordinate, Distance},
};

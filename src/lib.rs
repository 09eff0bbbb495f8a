//! Nearby bike-share stations from a bundled feed.
//!
//! Stations are decoded by [`feed`], measured from a reference point with
//! [`repository::annotate`] and narrowed down with
//! [`repository::filter_and_sort`].
pub mod feed;
pub mod prelude;
pub mod repository;
pub mod shared;

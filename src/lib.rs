//! Listing core of a real-estate marketplace.
//!
//! The crate bundles the two pieces of logic every catalog screen shares: the
//! paginated, filterable, selectable list over fetched records
//! ([`listview::ListView`] on top of [`pagination`]) and the market-position
//! computation used when pricing an announcement against a reference band
//! ([`pricing`]). Transport, authentication, routing and rendering belong to
//! the embedding shell; it reaches the catalog through the traits in
//! [`repository`] and the functions in [`services`].

pub mod config;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod listview;
pub mod pagination;
pub mod pricing;
pub mod repository;
pub mod services;

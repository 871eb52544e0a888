pub mod error;
pub use error::DirectoryError;

pub mod schedule;
pub mod search;

pub mod venue_service;
pub mod venue_service_impl;
pub use venue_service::VenueService;
pub use venue_service_impl::SeaOrmVenueService;

pub mod artist_service;
pub mod artist_service_impl;
pub use artist_service::ArtistService;
pub use artist_service_impl::SeaOrmArtistService;

pub mod show_service;
pub mod show_service_impl;
pub use show_service::ShowService;
pub use show_service_impl::SeaOrmShowService;

//! Domain core for the DJ Miss Haze site backend: event-type content
//! resolution, booking inquiry validation, image slot bookkeeping, and
//! the Postgres storage layer shared by the API server.

pub mod content;
pub mod images;
pub mod inquiry;
pub mod storage;

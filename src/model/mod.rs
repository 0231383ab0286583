//! Detection result data model.
//!
//! `PlateResponse` mirrors the JSON body of `GET /api/new-plate` field for
//! field; `ResultRecord` is the validated form handed to the views.

pub mod image_ref;
mod record;

pub use image_ref::{EmbeddedImage, ImageRef};
pub use record::{AddressRecord, PlateEntry, PlateResponse, ResultRecord};

//! Concrete Eventbrite resource variants.
//!
//! Each variant differs only in its API path segment, the load arguments it
//! accepts and the capabilities it exposes:
//!
//! | Variant         | API type        | Capabilities           | Load arguments   |
//! |-----------------|-----------------|------------------------|------------------|
//! | [`Event`]       | `events`        | create, update, delete | property, conditions |
//! | [`Venue`]       | `venues`        | create, update         | property, conditions |
//! | [`Organizer`]   | `organizers`    | create, update         | property, conditions |
//! | [`Series`]      | `series`        | update, delete         | property, conditions |
//! | [`Webhook`]     | `webhooks`      | create, delete         | conditions       |
//! | [`Media`]       | `media`         | upload                 | property, conditions |
//! | [`Order`]       | `orders`        | none                   | conditions       |
//! | [`User`]        | `users`         | none                   | property, conditions |
//! | [`Category`]    | `categories`    | none                   | conditions       |
//! | [`Subcategory`] | `subcategories` | none                   | conditions       |
//! | [`System`]      | `system`        | none                   | property         |

mod category;
mod event;
mod media;
mod order;
mod organizer;
mod series;
mod subcategory;
mod system;
mod user;
mod venue;
mod webhook;

pub use category::Category;
pub use event::Event;
pub use media::{crop_mask_params, ImageType, Media, CROP_MASK_KEYS};
pub use order::Order;
pub use organizer::Organizer;
pub use series::Series;
pub use subcategory::Subcategory;
pub use system::System;
pub use user::{User, CURRENT_USER_ID};
pub use venue::Venue;
pub use webhook::Webhook;

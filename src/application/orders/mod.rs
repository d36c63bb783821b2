//! Order use cases

mod counter;
mod draft;
mod service;

pub use counter::OrderCounter;
pub use draft::{OrderDraft, OrderEdit, OrderPolicy};
pub use service::OrderService;

//! Client side of the like button: an HTTP API binding and the widget state
//! that drives it.

pub mod api;
pub mod widget;

pub use api::{ClientError, HttpLikeApi, LikeApi};
pub use widget::{LikeState, LikeWidget, Toggle};

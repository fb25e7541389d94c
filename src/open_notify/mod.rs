mod client;
mod iss_now_response;

pub use client::{FetchError, OpenNotifyClientError, new_client};

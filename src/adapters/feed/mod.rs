//! Profile feed adapters used by the rendered page.

mod http_feed;

pub use http_feed::HttpProfileFeed;

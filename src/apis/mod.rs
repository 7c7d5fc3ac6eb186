/// Provider adapters for the external token security services
///
/// Each adapter issues exactly one request per `scan` call and returns the
/// provider's own response shape; normalization lives in `crate::scan`.
pub mod client;
pub mod goplus;
pub mod honeypot;
pub mod lenient;
pub mod quickintel;

pub use client::HttpClient;
pub use goplus::GoPlusClient;
pub use honeypot::HoneypotClient;
pub use quickintel::QuickIntelClient;

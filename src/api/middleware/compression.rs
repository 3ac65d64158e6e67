//! Gzip body compression in both directions.

use tower_http::compression::CompressionLayer;
use tower_http::decompression::RequestDecompressionLayer;

/// Compresses responses for clients sending `Accept-Encoding: gzip`.
///
/// Bodies under 32 bytes and already-compressed content types are passed
/// through unchanged.
pub fn response_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}

/// Inflates request bodies sent with `Content-Encoding: gzip`.
pub fn request_layer() -> RequestDecompressionLayer {
    RequestDecompressionLayer::new().gzip(true)
}

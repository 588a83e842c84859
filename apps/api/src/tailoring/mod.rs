// Resume tailoring: keyword extraction, section split, rewrite, upload decoding.
// Everything here is deterministic string processing scoped to one request.

pub mod handlers;
pub mod keywords;
pub mod rewrite;
pub mod sections;
pub mod tailor;
pub mod upload;

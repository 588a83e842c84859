// Job application submission. Only a simulated backend exists; no job board
// is contacted.

pub mod applicant;
pub mod handlers;

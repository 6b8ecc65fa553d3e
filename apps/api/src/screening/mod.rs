//! AI-assisted candidate screening: uploads go to the external resume-parsing
//! service, the structured result is persisted for the candidates dashboard.

pub mod handlers;
pub mod parser;
pub mod queries;

pub mod arguments;
pub mod codec;
pub mod discovery;
pub mod errors;
pub mod orchestrator;
pub mod resolver;
pub mod version;

pub mod email;
pub mod engine;
pub mod http;
pub mod lambda_structure;
pub mod model;
pub mod notifier;
pub mod resolver;
pub mod result;

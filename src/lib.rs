mod config;
mod metrics;
mod pair;
mod path;
mod render;
mod report;
mod runtime;

pub use config::*;
pub use metrics::*;
pub use pair::*;
pub use path::*;
pub use render::*;
pub use report::*;
pub use runtime::*;

mod notifier;
mod tracing_logger;

pub use notifier::TracingNotifier;
pub use tracing_logger::TracingLogger;

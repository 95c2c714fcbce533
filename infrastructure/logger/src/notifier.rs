use business::domain::notifier::Notifier;
use tracing::info;

/// Emits user-facing notifications as structured log events. A UI layer can
/// subscribe to the `Notifications -- ` target to surface them as toasts.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, description: &str) {
        info!(target: "Notifications -- ", title, description, "notification");
    }
}

/// Fire-and-forget sink for user-visible messages.
///
/// Titles and descriptions are message codes (e.g. `cart.item_added`) so the
/// presentation layer can localize them.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, description: &str);
}

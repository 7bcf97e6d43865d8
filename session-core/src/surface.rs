//! Interactive surfaces the controllers talk to: the confirmation prompt
//! and the toast notifications.

/// Modal yes/no prompt used before destructive actions
#[allow(async_fn_in_trait)]
pub trait ConfirmPrompt {
    /// Resolves once the user answers; `true` means confirmed
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Fire-and-forget toast notifications
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

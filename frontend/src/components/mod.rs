mod comment_carousel;
mod confirm_dialog;
mod header;
mod require_auth;
mod toast;

pub use comment_carousel::CommentCarousel;
pub use confirm_dialog::{ConfirmDialogHost, DialogHandle};
pub use header::Header;
pub use require_auth::RequireAuth;
pub use toast::{ToastHandle, ToastHost};

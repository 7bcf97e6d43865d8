//! Hook giving a component a `ViewCell` that re-renders it on every update.

use session_core::ViewCell;
use yew::prelude::*;

/// Create the component's view state once, on mount.
///
/// The component holds the only strong handle; async work spawned from it
/// should capture `cell.handle()` so that a response arriving after the
/// component unmounts is dropped instead of applied.
///
/// # Example
/// ```ignore
/// let view = use_view(SubjectsState::default);
/// let handle = view.handle();
/// spawn_local(async move { subjects::load_subjects(&*api, &handle).await; });
/// ```
#[hook]
pub fn use_view<T, F>(init: F) -> ViewCell<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let trigger = use_force_update();
    let cell = use_memo((), move |_| {
        let cell = ViewCell::new(init());
        cell.set_on_change(move || trigger.force_update());
        cell
    });
    (*cell).clone()
}

use std::cell::RefCell;

use gtk4::prelude::*;
use gtk4 as gtk;

pub mod compose;
pub mod connect;
pub mod dialogs;
pub mod main_window;
pub mod message_list;

/// Hand `value` to `window` and drop it when the window is destroyed.
/// Widget callbacks hold only weak references, so this is what keeps the
/// board alive for the window's lifetime.
pub fn release_on_destroy<T: 'static>(window: &(impl IsA<gtk::Window> + IsA<gtk::Widget>), value: T) {
    let held = RefCell::new(Some(value));
    window.connect_destroy(move |_| {
        held.borrow_mut().take();
    });
}

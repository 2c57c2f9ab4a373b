use std::rc::Rc;

use gtk4::prelude::*;
use gtk4 as gtk;

use crate::board::ComposeForm;

/// Author and content entries with a Post button.
#[derive(Clone)]
pub struct ComposeBox {
    root: gtk::Box,
    author: gtk::Entry,
    content: gtk::Entry,
    post: gtk::Button,
}

impl ComposeBox {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let author = gtk::Entry::new();
        author.set_placeholder_text(Some("Your name"));
        author.set_hexpand(true);
        root.append(&author);

        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let content = gtk::Entry::new();
        content.set_placeholder_text(Some("Leave a message…"));
        content.set_hexpand(true);
        let post = gtk::Button::with_label("Post");
        post.add_css_class("suggested-action");
        row.append(&content);
        row.append(&post);
        root.append(&row);

        Self { root, author, content, post }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Run `submit` on Post click or Enter in the content entry.
    pub fn connect_submit(&self, submit: Rc<dyn Fn()>) {
        {
            let submit = submit.clone();
            self.post.connect_clicked(move |_| (submit)());
        }
        self.content.connect_activate(move |_| (submit)());
    }
}

impl ComposeForm for ComposeBox {
    fn author(&self) -> String {
        self.author.text().to_string()
    }

    fn content(&self) -> String {
        self.content.text().to_string()
    }

    fn reset(&self) {
        self.author.set_text("");
        self.content.set_text("");
    }
}

use async_trait::async_trait;
use gtk4::prelude::*;
use gtk4 as gtk;

use crate::board::Prompter;

/// Modal dialogs parented to the main window.
pub struct DialogPrompter {
    parent: glib::WeakRef<gtk::Window>,
}

impl DialogPrompter {
    pub fn new(parent: &impl IsA<gtk::Window>) -> Self {
        Self { parent: parent.upcast_ref::<gtk::Window>().downgrade() }
    }

    fn dialog(&self, title: &str, accept: &str, destructive: bool) -> gtk::Dialog {
        let dialog = gtk::Dialog::builder().title(title).modal(true).build();
        dialog.set_transient_for(self.parent.upgrade().as_ref());
        let _ = dialog.add_button("Cancel", gtk::ResponseType::Cancel);
        let ok_btn = dialog.add_button(accept, gtk::ResponseType::Ok);
        ok_btn.add_css_class(if destructive { "destructive-action" } else { "suggested-action" });
        dialog.set_default_response(gtk::ResponseType::Ok);
        dialog
    }

    fn padded(content: &gtk::Box) {
        content.set_margin_top(12);
        content.set_margin_bottom(12);
        content.set_margin_start(12);
        content.set_margin_end(12);
    }
}

#[async_trait(?Send)]
impl Prompter for DialogPrompter {
    async fn prompt(&self, label: &str) -> Option<String> {
        let dialog = self.dialog("Edit Message", "OK", false);
        let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
        Self::padded(&content);

        let info = gtk::Label::new(Some(label));
        info.set_halign(gtk::Align::Start);
        content.append(&info);

        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_activates_default(true);
        content.append(&entry);
        dialog.content_area().append(&content);

        let response = dialog.run_future().await;
        let text = entry.text().to_string();
        dialog.close();
        (response == gtk::ResponseType::Ok).then_some(text)
    }

    async fn confirm(&self, question: &str) -> bool {
        let dialog = self.dialog("Delete Message", "Delete", true);
        let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
        Self::padded(&content);
        content.append(&gtk::Label::new(Some(question)));
        dialog.content_area().append(&content);

        let response = dialog.run_future().await;
        dialog.close();
        response == gtk::ResponseType::Ok
    }
}

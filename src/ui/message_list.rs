use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4 as gtk;

use crate::board::MessageView;
use crate::render::Card;

/// Callbacks wired to each card's Edit and Delete buttons.
#[derive(Clone)]
pub struct CardActions {
    pub on_edit: Rc<dyn Fn(i64)>,
    pub on_delete: Rc<dyn Fn(i64)>,
}

/// Scrollable list of message cards. Errors go to the window's toast overlay.
#[derive(Clone)]
pub struct MessageList {
    root: gtk::ScrolledWindow,
    list: gtk::ListBox,
    overlay: adw::ToastOverlay,
    actions: Rc<RefCell<Option<CardActions>>>,
}

impl MessageList {
    pub fn new(overlay: adw::ToastOverlay) -> Self {
        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("boxed-list");
        list.set_placeholder(Some(&gtk::Label::new(Some("No messages yet"))));

        let root = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .child(&list)
            .build();

        Self { root, list, overlay, actions: Rc::new(RefCell::new(None)) }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Number of card rows currently shown.
    pub fn card_count(&self) -> usize {
        let mut count = 0;
        let mut child = self.list.first_child();
        while let Some(widget) = child {
            if widget.is::<gtk::ListBoxRow>() {
                count += 1;
            }
            child = widget.next_sibling();
        }
        count
    }

    /// Whether the empty-list placeholder is still attached.
    pub fn has_placeholder(&self) -> bool {
        let mut child = self.list.first_child();
        while let Some(widget) = child {
            if !widget.is::<gtk::ListBoxRow>() {
                return true;
            }
            child = widget.next_sibling();
        }
        false
    }

    pub fn set_actions(&self, actions: CardActions) {
        *self.actions.borrow_mut() = Some(actions);
    }

    fn card_row(card: &Card, actions: Option<&CardActions>) -> gtk::ListBoxRow {
        let body = gtk::Box::new(gtk::Orientation::Vertical, 4);
        body.set_margin_top(12);
        body.set_margin_bottom(12);
        body.set_margin_start(12);
        body.set_margin_end(12);

        // Plain text only: message bodies must not be parsed as markup.
        let title = gtk::Label::new(Some(&card.title));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        body.append(&title);

        let text = gtk::Label::new(Some(&card.text));
        text.set_wrap(true);
        text.set_selectable(true);
        text.set_halign(gtk::Align::Start);
        body.append(&text);

        let time = gtk::Label::new(Some(&card.timestamp));
        time.add_css_class("dim-label");
        time.add_css_class("caption");
        time.set_halign(gtk::Align::Start);
        body.append(&time);

        let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        buttons.set_halign(gtk::Align::End);
        let edit_btn = gtk::Button::with_label("Edit");
        let delete_btn = gtk::Button::with_label("Delete");
        delete_btn.add_css_class("destructive-action");
        buttons.append(&edit_btn);
        buttons.append(&delete_btn);
        body.append(&buttons);

        if let Some(actions) = actions {
            let id = card.id;
            let on_edit = actions.on_edit.clone();
            edit_btn.connect_clicked(move |_| (on_edit)(id));
            let on_delete = actions.on_delete.clone();
            delete_btn.connect_clicked(move |_| (on_delete)(id));
        }

        let row = gtk::ListBoxRow::new();
        row.set_activatable(false);
        row.set_child(Some(&body));
        row
    }
}

impl MessageView for MessageList {
    fn render(&self, cards: Vec<Card>) {
        // The placeholder is a child of the list too; only rows are cards.
        let mut child = self.list.first_child();
        while let Some(widget) = child {
            child = widget.next_sibling();
            if widget.is::<gtk::ListBoxRow>() {
                self.list.remove(&widget);
            }
        }
        let actions = self.actions.borrow();
        for card in &cards {
            self.list.append(&Self::card_row(card, actions.as_ref()));
        }
    }

    fn show_error(&self, text: &str) {
        self.overlay.add_toast(adw::Toast::new(text));
    }
}

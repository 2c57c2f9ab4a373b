use std::rc::{Rc, Weak};

use adw::prelude::*;
use adw::Application;

use crate::api::ApiClient;
use crate::app::Settings;
use crate::board::MessageBoard;
use crate::ui::compose::ComposeBox;
use crate::ui::dialogs::DialogPrompter;
use crate::ui::message_list::{CardActions, MessageList};
use crate::utils::RuntimeApi;

type GtkBoard = MessageBoard<RuntimeApi, MessageList, DialogPrompter>;

// Board futures only log failures here; the board already raised a toast.
fn spawn_board<F, Fut>(board: &Weak<GtkBoard>, op: F)
where
    F: FnOnce(Rc<GtkBoard>) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let Some(board) = board.upgrade() else { return };
    glib::MainContext::default().spawn_local(op(board));
}

pub fn show_main_window(app: &Application, settings: Settings) {
    let client = match ApiClient::new(&settings.base_url, settings.timeout()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("stored server URL unusable: {}", e);
            crate::ui::connect::show_connect_window(app);
            return;
        }
    };
    log::info!("using message endpoint {}", client.messages_url());

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Guestbook")
        .default_width(640)
        .default_height(720)
        .build();

    let overlay = adw::ToastOverlay::new();
    let compose = ComposeBox::new();
    let list = MessageList::new(overlay.clone());

    let body = gtk4::Box::new(gtk4::Orientation::Vertical, 6);
    body.append(&compose.widget());
    body.append(&list.widget());
    overlay.set_child(Some(&body));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("Guestbook"));
    header.set_title_widget(Some(&title));
    let refresh_btn = gtk4::Button::from_icon_name("view-refresh-symbolic");
    refresh_btn.set_tooltip_text(Some("Refresh"));
    header.pack_start(&refresh_btn);
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));

    let board: Rc<GtkBoard> = Rc::new(MessageBoard::new(
        RuntimeApi(client),
        list.clone(),
        DialogPrompter::new(&window),
        settings.timestamp_style(),
    ));
    let weak = Rc::downgrade(&board);

    list.set_actions(CardActions {
        on_edit: {
            let weak = weak.clone();
            Rc::new(move |id: i64| {
                spawn_board(&weak, move |board| async move {
                    let _ = board.edit_message(id).await;
                })
            })
        },
        on_delete: {
            let weak = weak.clone();
            Rc::new(move |id: i64| {
                spawn_board(&weak, move |board| async move {
                    let _ = board.delete_message(id).await;
                })
            })
        },
    });

    {
        let weak = weak.clone();
        let form = compose.clone();
        compose.connect_submit(Rc::new(move || {
            let form = form.clone();
            spawn_board(&weak, move |board| async move {
                let _ = board.submit(&form).await;
            })
        }));
    }

    {
        let weak = weak.clone();
        refresh_btn.connect_clicked(move |_| {
            spawn_board(&weak, |board| async move {
                let _ = board.fetch_messages().await;
            })
        });
    }

    crate::ui::release_on_destroy(&window, board);

    window.present();
    spawn_board(&weak, |board| async move {
        let _ = board.fetch_messages().await;
    });
}

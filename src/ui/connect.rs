use std::rc::Rc;
use std::time::Duration;

use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;

use crate::api::ApiClient;
use crate::app::Settings;

pub fn show_connect_window(app: &Application) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Guestbook Setup")
        .default_width(420)
        .default_height(220)
        .resizable(false)
        .build();

    let toast_overlay = adw::ToastOverlay::new();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let title = gtk::Label::new(Some("Connect to a guestbook server"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let server_entry = gtk::Entry::new();
    server_entry.set_placeholder_text(Some("Server URL (e.g. http://localhost:8000)"));
    server_entry.set_hexpand(true);
    root.append(&server_entry);

    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    status.set_halign(gtk::Align::Start);
    root.append(&status);

    let connect_btn = gtk::Button::with_label("Connect");
    connect_btn.add_css_class("suggested-action");
    connect_btn.set_halign(gtk::Align::End);
    root.append(&connect_btn);

    toast_overlay.set_child(Some(&root));
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    header.set_title_widget(Some(&gtk::Label::new(Some("Guestbook"))));
    container.append(&header);
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    let on_connect = {
        let app = app.clone();
        let window = window.clone();
        let overlay = toast_overlay.clone();
        let server_entry = server_entry.clone();
        move || {
            let url = crate::utils::normalize_url(&server_entry.text());
            let client = match ApiClient::new(&url, Some(Duration::from_secs(5))) {
                Ok(client) => client,
                Err(e) => {
                    overlay.add_toast(adw::Toast::new(&format!("{}", e)));
                    return;
                }
            };
            status.set_label("Connecting…");

            let (app, window, overlay, status) = (app.clone(), window.clone(), overlay.clone(), status.clone());
            glib::MainContext::default().spawn_local(async move {
                let ping = crate::utils::on_runtime(async move { client.ping().await }).await;
                // The URL is kept even when the server cannot be reached yet.
                let message = match ping {
                    Ok(code) if (200..300).contains(&code) => "Connected".to_string(),
                    Ok(code) => format!("Saved (server answered HTTP {})", code),
                    Err(e) => {
                        log::warn!("server check for {} failed: {}", url, e);
                        "Saved (server unreachable)".to_string()
                    }
                };
                log::info!("server check: {} - {}", url, message);
                status.set_label(&message);

                let mut settings = Settings::load();
                settings.base_url = url;
                if let Err(e) = settings.save() {
                    overlay.add_toast(adw::Toast::new(&format!("Failed to save settings: {}", e)));
                }
                crate::ui::main_window::show_main_window(&app, settings);
                window.close();
            });
        }
    };

    let on_connect: Rc<dyn Fn()> = Rc::new(on_connect);
    {
        let on_connect = on_connect.clone();
        connect_btn.connect_clicked(move |_| (on_connect)());
    }
    server_entry.connect_activate(move |_| (on_connect)());

    window.present();
}

use adw::prelude::*;
use adw::Application;
use env_logger::Env;

fn main() -> glib::ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = Application::builder()
        .application_id("com.example.GuestbookGtk")
        .build();
    app.connect_activate(|app| {
        guestbook_gtk::app::build_ui(app);
    });
    app.run()
}

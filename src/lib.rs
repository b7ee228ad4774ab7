pub mod api;
pub mod carousel;
pub mod checkin;
pub mod chat;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod db;
pub mod embed;
pub mod models;
pub mod onboarding;
pub mod progress;
pub mod resources;
pub mod roster;
pub mod session;
pub mod timer;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MAMACARE_LOG")
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::get_app_info,
            commands::auth::select_role,
            commands::auth::submit_credentials,
            commands::auth::submit_patient_details,
            commands::auth::submit_doctor_details,
            commands::auth::select_trimester,
            commands::auth::onboarding_back,
            commands::auth::get_onboarding_state,
            commands::auth::dismiss_welcome,
            commands::auth::current_user,
            commands::auth::logout,
            commands::checkin::submit_checkin,
            commands::checkin::get_checkin_history,
            commands::checkin::get_checkin_options,
            commands::progress::get_progress,
            commands::chat::get_messages,
            commands::chat::switch_channel,
            commands::chat::send_chat_message,
            commands::chat::teardown_chat,
            commands::resources::get_resource_catalog,
            commands::resources::open_article,
            commands::resources::open_video,
            commands::resources::open_website,
            commands::resources::close_resource,
            commands::resources::set_article_locale,
            commands::resources::get_open_resource,
            commands::resources::fetch_remote_articles,
            commands::roster::get_doctor_dashboard,
            commands::roster::select_patient,
            commands::roster::clear_patient_selection,
            commands::roster::get_selected_patient,
            commands::landing::get_carousel,
            commands::landing::start_carousel,
            commands::landing::stop_carousel,
            commands::landing::advance_carousel,
            commands::articles_api::start_article_service,
            commands::articles_api::stop_article_service,
            commands::articles_api::get_article_service_status,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Mama Care");
}

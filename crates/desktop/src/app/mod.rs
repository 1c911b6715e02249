//! Main application module

mod panels;

use crate::config::Config;
use crate::storage::FileStorage;
use bookmybox_core::{
    AuthScreen, ChartConfig, Dashboard, DashboardData, DemoAuthenticator, DemoCredential,
    DemoPaymentProcessor, Session,
};

use eframe::egui;
use tracing::warn;

const DEMO_DATA: &str = include_str!("../../../../assets/demo_data.json");

pub struct BookMyBoxApp {
    pub(crate) config: Config,
    pub(crate) session: Session<FileStorage>,
    pub(crate) auth_screen: AuthScreen,
    pub(crate) dashboard: Dashboard,
    pub(crate) demo_accounts: Vec<DemoCredential>,
    // Last non-session error shown in the top bar
    pub(crate) status: Option<String>,
    pub(crate) show_settings: bool,
}

impl BookMyBoxApp {
    pub fn new(config: Config) -> Self {
        let storage = FileStorage::open_or_empty(&config.storage_path);
        let session = Session::restored(storage, DemoAuthenticator::new());
        let demo_accounts = session.authenticator().demo_credentials();

        let mut dashboard = Dashboard::new(
            config.api_base_url.clone(),
            ChartConfig::desktop(),
            Box::new(DemoPaymentProcessor::default()),
        );
        let mut status = None;
        match DashboardData::from_json(DEMO_DATA) {
            Ok(data) => dashboard.set_data(data),
            Err(e) => {
                warn!("failed to load dashboard data: {}", e);
                status = Some(e.to_string());
            }
        }

        Self {
            config,
            session,
            auth_screen: AuthScreen::default(),
            dashboard,
            demo_accounts,
            status,
            show_settings: false,
        }
    }
}

impl eframe::App for BookMyBoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_panel(ctx);

        if self.session.is_authenticated() {
            self.render_dashboard_panel(ctx);
        } else {
            self.render_auth_panel(ctx);
        }
    }
}

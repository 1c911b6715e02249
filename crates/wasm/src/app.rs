//! WASM App state - same layout as the desktop version

use bookmybox_core::{
    AuthScreen, ChartConfig, Dashboard, DashboardData, DemoAuthenticator, DemoCredential,
    DemoPaymentProcessor, Session,
};
use eframe::egui;
use tracing::warn;

use crate::storage::{api_base_from_location, BrowserStorage};

const DEMO_DATA: &str = include_str!("../../../assets/demo_data.json");

pub struct WasmApp {
    pub(crate) session: Session<BrowserStorage>,
    pub(crate) auth_screen: AuthScreen,
    pub(crate) dashboard: Dashboard,
    pub(crate) demo_accounts: Vec<DemoCredential>,
    pub(crate) status: Option<String>,
}

impl WasmApp {
    pub fn new() -> Self {
        let session = Session::restored(BrowserStorage::open(), DemoAuthenticator::new());
        let demo_accounts = session.authenticator().demo_credentials();

        let mut status = None;
        if !session.storage().is_persistent() {
            status = Some("Browser storage is disabled; you will be signed out on reload".to_string());
        }

        let mut dashboard = Dashboard::new(
            api_base_from_location(),
            ChartConfig::wasm(),
            Box::new(DemoPaymentProcessor::default()),
        );
        match DashboardData::from_json(DEMO_DATA) {
            Ok(data) => dashboard.set_data(data),
            Err(e) => {
                warn!("failed to load dashboard data: {}", e);
                status = Some(e.to_string());
            }
        }

        Self {
            session,
            auth_screen: AuthScreen::default(),
            dashboard,
            demo_accounts,
            status,
        }
    }
}

impl eframe::App for WasmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_panel(ctx);

        if self.session.is_authenticated() {
            self.render_dashboard(ctx);
        } else {
            self.render_login(ctx);
        }
    }
}

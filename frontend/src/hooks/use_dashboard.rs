use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_periodic_refresh::{use_periodic_refresh, RefreshConfig};
use crate::controller::{ChartRenderer, ClientController, DashboardState};
use crate::services::{ApiClient, BrowserHost, CanvasSurface};

pub const CHART_WIDTH: u32 = 480;
pub const CHART_HEIGHT: u32 = 320;

pub type BrowserController = ClientController<ApiClient, BrowserHost>;

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub controller: Rc<BrowserController>,
    pub expense_canvas: NodeRef,
    pub balance_canvas: NodeRef,
}

/// Owns the page's controller for the lifetime of the component.
///
/// Loads everything once after the first render (so the canvases exist),
/// then again on every refresh tick.
#[hook]
pub fn use_dashboard() -> UseDashboardResult {
    let force_update = use_force_update();
    let expense_canvas = use_node_ref();
    let balance_canvas = use_node_ref();

    let controller = {
        let expense_canvas = expense_canvas.clone();
        let balance_canvas = balance_canvas.clone();
        use_memo((), move |_| {
            let charts = ChartRenderer::new(
                Box::new(CanvasSurface::new(expense_canvas, CHART_WIDTH, CHART_HEIGHT)),
                Box::new(CanvasSurface::new(balance_canvas, CHART_WIDTH, CHART_HEIGHT)),
            );
            ClientController::new(ApiClient::new(), BrowserHost, charts, move || {
                force_update.force_update()
            })
        })
    };

    let refresh = {
        let controller = controller.clone();
        use_callback((), move |_, _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.refresh_all().await;
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    use_periodic_refresh(RefreshConfig::default(), refresh);

    UseDashboardResult {
        state: controller.snapshot(),
        controller,
        expense_canvas,
        balance_canvas,
    }
}

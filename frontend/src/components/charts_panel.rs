use yew::prelude::*;

use crate::hooks::use_dashboard::{CHART_HEIGHT, CHART_WIDTH};

/// The two chart canvases. Drawing happens outside the virtual DOM, through
/// the node refs handed to the chart renderer.
#[derive(Properties, PartialEq)]
pub struct ChartsPanelProps {
    pub expense_canvas: NodeRef,
    pub balance_canvas: NodeRef,
}

#[function_component(ChartsPanel)]
pub fn charts_panel(props: &ChartsPanelProps) -> Html {
    html! {
        <section class="charts-section">
            <div class="chart-card">
                <h3 class="chart-title">{"Expenses by Category"}</h3>
                <canvas
                    id="expense-chart"
                    ref={props.expense_canvas.clone()}
                    width={CHART_WIDTH.to_string()}
                    height={CHART_HEIGHT.to_string()}
                ></canvas>
            </div>
            <div class="chart-card">
                <h3 class="chart-title">{"Balance Over Time"}</h3>
                <canvas
                    id="balance-chart"
                    ref={props.balance_canvas.clone()}
                    width={CHART_WIDTH.to_string()}
                    height={CHART_HEIGHT.to_string()}
                ></canvas>
            </div>
        </section>
    }
}

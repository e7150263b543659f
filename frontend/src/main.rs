use log::LevelFilter;
use shared::FormField;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod controller;
mod hooks;
mod services;

use components::{ChartsPanel, Header, TransactionFilters, TransactionFormView, TransactionTable};
use hooks::use_dashboard;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let dashboard = use_dashboard();
    let state = &dashboard.state;

    let on_form_change = {
        let controller = dashboard.controller.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            controller.update_form(field, value);
        })
    };

    let on_submit = {
        let controller = dashboard.controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit_form().await;
            });
        })
    };

    let on_filter = {
        let controller = dashboard.controller.clone();
        Callback::from(move |(category, kind): (String, String)| {
            controller.filter_transactions(&category, &kind);
        })
    };

    let on_delete = {
        let controller = dashboard.controller.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.delete_transaction(id).await;
            });
        })
    };

    html! {
        <div class="app">
            <Header balance={state.balance.clone()} />
            <main class="main-content">
                <div class="container">
                    <TransactionFormView
                        form={state.form.clone()}
                        submitting={state.submitting}
                        on_change={on_form_change}
                        {on_submit}
                    />
                    <ChartsPanel
                        expense_canvas={dashboard.expense_canvas.clone()}
                        balance_canvas={dashboard.balance_canvas.clone()}
                    />
                    <section class="transactions-section">
                        <h2>{"Transactions"}</h2>
                        <TransactionFilters {on_filter} />
                        <TransactionTable rows={state.store.rows().to_vec()} {on_delete} />
                    </section>
                </div>
            </main>
        </div>
    }
}

fn main() {
    Logger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}

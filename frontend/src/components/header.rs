use yew::prelude::*;

use crate::controller::BalanceDisplay;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub balance: BalanceDisplay,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Personal Finance Tracker"}</h1>
                <div class="summary-cards">
                    <div class="summary-card balance">
                        <span class="summary-label">{"Balance"}</span>
                        <span id="total-balance" class="summary-amount">{&props.balance.balance}</span>
                    </div>
                    <div class="summary-card income">
                        <span class="summary-label">{"Income"}</span>
                        <span id="total-income" class="summary-amount">{&props.balance.income}</span>
                    </div>
                    <div class="summary-card expense">
                        <span class="summary-label">{"Expenses"}</span>
                        <span id="total-expense" class="summary-amount">{&props.balance.expense}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

use shared::{FormField, TransactionForm};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub form: TransactionForm,
    pub submitting: bool,
    pub on_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

fn input_handler(field: FormField, on_change: &Callback<(FormField, String)>) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit((field, input.value()));
    })
}

#[function_component(TransactionFormView)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let form = &props.form;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_type_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((FormField::Type, select.value()));
        })
    };

    html! {
        <section class="add-transaction-section">
            <h2>{"Add Transaction"}</h2>
            <form id="transaction-form" class="transaction-form" {onsubmit}>
                <div class="form-group">
                    <label for="type">{"Type"}</label>
                    <select id="type" name="type" onchange={on_type_change} disabled={props.submitting}>
                        <option value="" selected={form.kind.is_empty()}>{"Select type"}</option>
                        <option value="income" selected={form.kind == "income"}>{"Income"}</option>
                        <option value="expense" selected={form.kind == "expense"}>{"Expense"}</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        name="amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={form.amount.clone()}
                        oninput={input_handler(FormField::Amount, &props.on_change)}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <input
                        type="text"
                        id="category"
                        name="category"
                        placeholder="Food, Rent, Salary..."
                        value={form.category.clone()}
                        oninput={input_handler(FormField::Category, &props.on_change)}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        name="date"
                        value={form.date.clone()}
                        oninput={input_handler(FormField::Date, &props.on_change)}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <input
                        type="text"
                        id="notes"
                        name="notes"
                        placeholder="Optional"
                        value={form.notes.clone()}
                        oninput={input_handler(FormField::Notes, &props.on_change)}
                        disabled={props.submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Saving..." } else { "Add Transaction" }}
                </button>
            </form>
        </section>
    }
}

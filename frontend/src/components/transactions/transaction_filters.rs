use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Category substring and type select above the table
#[derive(Properties, PartialEq)]
pub struct TransactionFiltersProps {
    /// Emits `(category, type)`; an empty type means any
    pub on_filter: Callback<(String, String)>,
}

#[function_component(TransactionFilters)]
pub fn transaction_filters(props: &TransactionFiltersProps) -> Html {
    let category = use_state(String::new);
    let kind = use_state(String::new);

    let on_category_input = {
        let category = category.clone();
        let kind = kind.clone();
        let on_filter = props.on_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            category.set(value.clone());
            on_filter.emit((value, (*kind).clone()));
        })
    };

    let on_kind_change = {
        let category = category.clone();
        let kind = kind.clone();
        let on_filter = props.on_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            kind.set(value.clone());
            on_filter.emit(((*category).clone(), value));
        })
    };

    html! {
        <div class="filters">
            <input
                type="text"
                id="category-filter"
                placeholder="Filter by category..."
                value={(*category).clone()}
                oninput={on_category_input}
            />
            <select id="type-filter" onchange={on_kind_change}>
                <option value="" selected={kind.is_empty()}>{"All types"}</option>
                <option value="income" selected={*kind == "income"}>{"Income"}</option>
                <option value="expense" selected={*kind == "expense"}>{"Expense"}</option>
            </select>
        </div>
    }
}

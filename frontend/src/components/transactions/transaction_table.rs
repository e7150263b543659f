use shared::{TableRow, PLACEHOLDER_TEXT};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<TableRow>,
    pub on_delete: Callback<i64>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Type"}</th>
                        <th>{"Category"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Notes"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody id="transactions-body">
                    {for props.rows.iter().map(|row| match row {
                        TableRow::Placeholder => html! {
                            <tr>
                                <td colspan="6" class="empty-row">{PLACEHOLDER_TEXT}</td>
                            </tr>
                        },
                        TableRow::Entry(view) => {
                            let id = view.id;
                            let on_delete = props.on_delete.clone();
                            let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id));

                            html! {
                                <tr key={id}>
                                    <td class="date">{&view.date}</td>
                                    <td><span class={view.css_class}>{&view.type_label}</span></td>
                                    <td class="category">{&view.category}</td>
                                    <td class={classes!("amount", view.css_class)}>{&view.amount}</td>
                                    <td class="notes">{&view.notes}</td>
                                    <td>
                                        <button class="btn btn-delete" {onclick}>{"Delete"}</button>
                                    </td>
                                </tr>
                            }
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

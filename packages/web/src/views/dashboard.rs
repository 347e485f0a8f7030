//! Dashboard: summary, transactions and categories for the signed-in user.
//!
//! The three lists load independently when the view opens. Mutations patch the
//! local copies on success and re-fetch the summary, since totals are computed
//! by the server. Requests are detached: leaving the page does not abort them.

use api::{Category, NewCategory, NewTransaction, Summary, Transaction};
use dioxus::prelude::*;
use ui::icons::{FaDownload, FaTrash};
use ui::{
    alert, report_and_alert, report_error, save_export, set_live, spawn_detached, try_claim,
    update_live, use_api, use_auth, AppClient, Icon, LoadState, LogoutButton, Navbar, ViewList,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let ledger = use_signal(ViewList::<Transaction>::new);
    let ledger_state = use_signal(LoadState::default);
    let summary = use_signal(|| Option::<Summary>::None);
    let categories = use_signal(ViewList::<Category>::new);

    let mut amount_input = use_signal(String::new);
    let mut category_choice = use_signal(String::new);
    let mut description_input = use_signal(String::new);
    let mut new_category = use_signal(String::new);
    let exporting = use_signal(|| false);

    // Fetch everything once on activation
    use_hook(|| {
        spawn_detached(load_transactions(client.clone(), ledger, ledger_state));
        spawn_detached(load_summary(client.clone(), summary));
        spawn_detached(load_categories(client.clone(), categories));
    });

    let handle_add_transaction = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(amount) = parse_amount(&amount_input()) else {
                alert("Enter a valid amount.");
                return;
            };
            let category_id = category_choice().parse::<i64>().ok();
            let category = category_id
                .and_then(|id| categories.read().get(id).map(|c| c.name.clone()));
            let description = description_input().trim().to_string();
            let new_txn = NewTransaction {
                amount,
                category_id,
                category,
                description: (!description.is_empty()).then_some(description),
            };

            let client = client.clone();
            spawn_detached(async move {
                match client.transactions().create(&new_txn).await {
                    Ok(txn) => {
                        update_live(ledger, |ledger| ledger.prepend(txn));
                        set_live(amount_input, String::new());
                        set_live(category_choice, String::new());
                        set_live(description_input, String::new());
                        load_summary(client, summary).await;
                    }
                    Err(e) => report_error("Failed to add transaction", &e),
                }
            });
        }
    };

    let delete_transaction = use_callback({
        let client = client.clone();
        move |id: i64| {
            let client = client.clone();
            spawn_detached(async move {
                match client.transactions().delete(id).await {
                    Ok(()) => {
                        update_live(ledger, |ledger| {
                            ledger.remove(id);
                        });
                        load_summary(client, summary).await;
                    }
                    Err(e) => report_error("Failed to delete transaction", &e),
                }
            });
        }
    });

    let handle_add_category = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let name = new_category().trim().to_string();
            if name.is_empty() {
                return;
            }
            let client = client.clone();
            spawn_detached(async move {
                match client.categories().create(&NewCategory { name }).await {
                    Ok(category) => {
                        update_live(categories, |categories| categories.append(category));
                        set_live(new_category, String::new());
                    }
                    Err(e) => report_error("Failed to add category", &e),
                }
            });
        }
    };

    let delete_category = use_callback({
        let client = client.clone();
        move |id: i64| {
            let client = client.clone();
            spawn_detached(async move {
                match client.categories().delete(id).await {
                    Ok(()) => {
                        update_live(categories, |categories| {
                            categories.remove(id);
                        });
                    }
                    Err(e) => report_error("Failed to delete category", &e),
                }
            });
        }
    });

    let handle_export = {
        let client = client.clone();
        move |_: MouseEvent| {
            if !try_claim(exporting) {
                return;
            }
            let client = client.clone();
            spawn_detached(async move {
                match client.transactions().export().await {
                    Ok(export) => {
                        if let Err(e) = save_export(&export) {
                            report_and_alert("Failed to save export", &e, "Could not save the export file.");
                        }
                    }
                    Err(e) => report_and_alert("Export failed", &e, "Export failed. Please try again."),
                }
                set_live(exporting, false);
            });
        }
    };

    rsx! {
        Navbar {
            if auth().is_admin() {
                Link { to: Route::Admin {}, "Admin panel" }
            }
            button {
                class: "secondary",
                disabled: exporting(),
                onclick: handle_export,
                Icon { icon: FaDownload, width: 12, height: 12 }
                if exporting() { " Exporting..." } else { " Export" }
            }
            LogoutButton {
                class: "secondary",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }

        div {
            class: "page",

            SummaryCards { summary: summary() }

            h2 { "Transactions" }

            form {
                class: "inline-form",
                onsubmit: handle_add_transaction,

                input {
                    r#type: "number",
                    step: "0.01",
                    placeholder: "Amount",
                    value: amount_input(),
                    oninput: move |evt: FormEvent| amount_input.set(evt.value()),
                }
                select {
                    value: category_choice(),
                    onchange: move |evt: FormEvent| category_choice.set(evt.value()),
                    option { value: "", "No category" }
                    for cat in categories.read().iter() {
                        option { key: "{cat.id}", value: "{cat.id}", "{cat.name}" }
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Description",
                    value: description_input(),
                    oninput: move |evt: FormEvent| description_input.set(evt.value()),
                }
                button { r#type: "submit", "Add" }
            }

            match ledger_state() {
                LoadState::Loading => rsx! {
                    p { class: "muted", "Loading transactions..." }
                },
                LoadState::Failed(message) => rsx! {
                    div { class: "error-banner", "Could not load transactions: {message}" }
                },
                LoadState::Loaded if ledger.read().is_empty() => rsx! {
                    p { class: "muted", "No transactions yet." }
                },
                LoadState::Loaded => rsx! {
                    table {
                        thead {
                            tr {
                                th { "Date" }
                                th { "Amount" }
                                th { "Category" }
                                th { "Description" }
                                th {}
                            }
                        }
                        tbody {
                            for txn in ledger.read().iter() {
                                tr {
                                    key: "{txn.id}",
                                    td { {txn.day().to_string()} }
                                    td {
                                        class: if txn.amount < 0.0 { "expense" } else { "income" },
                                        {format!("{:.2}", txn.amount)}
                                    }
                                    td { {txn.category_label().unwrap_or_default().to_string()} }
                                    td { {txn.description.clone().unwrap_or_default()} }
                                    td {
                                        button {
                                            class: "danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = txn.id;
                                                move |_| delete_transaction.call(id)
                                            },
                                            Icon { icon: FaTrash, width: 12, height: 12 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }

            h2 { "Categories" }

            form {
                class: "inline-form",
                onsubmit: handle_add_category,
                input {
                    r#type: "text",
                    placeholder: "New category",
                    value: new_category(),
                    oninput: move |evt: FormEvent| new_category.set(evt.value()),
                }
                button { r#type: "submit", "Add category" }
            }

            ul {
                for cat in categories.read().iter() {
                    li {
                        key: "{cat.id}",
                        "{cat.name} "
                        button {
                            class: "danger",
                            title: "Delete category",
                            onclick: {
                                let id = cat.id;
                                move |_| delete_category.call(id)
                            },
                            Icon { icon: FaTrash, width: 10, height: 10 }
                        }
                    }
                }
            }
        }
    }
}

/// Income, expense and net totals as last reported by the server.
#[component]
fn SummaryCards(summary: Option<Summary>) -> Element {
    let Some(summary) = summary else {
        return rsx! {
            p { class: "muted", "Loading summary..." }
        };
    };

    rsx! {
        div {
            class: "summary",
            div {
                class: "summary-card",
                div { class: "muted", "Income" }
                div { class: "value income", {format!("{:.2}", summary.total_income)} }
            }
            div {
                class: "summary-card",
                div { class: "muted", "Expenses" }
                div { class: "value expense", {format!("{:.2}", summary.total_expense)} }
            }
            div {
                class: "summary-card",
                div { class: "muted", "Net savings" }
                div { class: "value", {format!("{:.2}", summary.net_savings)} }
            }
        }
    }
}

async fn load_transactions(
    client: AppClient,
    ledger: Signal<ViewList<Transaction>>,
    state: Signal<LoadState>,
) {
    match client.transactions().list().await {
        Ok(txns) => {
            update_live(ledger, |ledger| ledger.replace(txns));
            set_live(state, LoadState::Loaded);
        }
        Err(e) => {
            report_error("Failed to load transactions", &e);
            set_live(state, LoadState::Failed(e.to_string()));
        }
    }
}

async fn load_summary(client: AppClient, summary: Signal<Option<Summary>>) {
    match client.transactions().summary().await {
        Ok(s) => {
            set_live(summary, Some(s));
        }
        Err(e) => report_error("Failed to load summary", &e),
    }
}

async fn load_categories(client: AppClient, categories: Signal<ViewList<Category>>) {
    match client.categories().list().await {
        Ok(list) => {
            update_live(categories, |categories| categories.replace(list));
        }
        Err(e) => report_error("Failed to load categories", &e),
    }
}

/// Parse the amount field. Blank, non-numeric and non-finite input is rejected.
fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

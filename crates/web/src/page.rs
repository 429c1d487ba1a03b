//! Cart page components.

use leptos::{html, prelude::*};

use trolley::render::{
    CLEAR_LABEL, CartBodyView, CartHeaderView, CartPageView, CartRowView, REMOVE_LABEL, stepper,
};

use crate::actions::CartActions;

/// Renders the latest cart page, replacing the previous one wholesale.
#[component]
pub(crate) fn CartPageHost(
    page: RwSignal<Option<CartPageView>>,
    actions: CartActions,
) -> impl IntoView {
    move || {
        page.get()
            .map(|page| view! { <CartPage page=page actions=actions /> })
    }
}

#[component]
fn CartPage(page: CartPageView, actions: CartActions) -> impl IntoView {
    let CartPageView { header, body } = page;

    view! {
        <section class="cart-page">
            <CartHeader header=header actions=actions />
            {match body {
                CartBodyView::Empty { message } => {
                    view! { <p class="cart-empty">{message}</p> }.into_any()
                }
                CartBodyView::Items { rows, total } => {
                    view! {
                        <ul class="cart-lines">
                            {rows
                                .into_iter()
                                .map(|row| view! { <CartRow row=row actions=actions /> })
                                .collect_view()}
                        </ul>
                        <h3 class="cart-total">{total}</h3>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CartHeader(header: CartHeaderView, actions: CartActions) -> impl IntoView {
    view! {
        <header class="cart-header">
            <h2>{header.title}</h2>
            <button
                type="button"
                class="btn btn-outline-danger"
                disabled=!header.clear_enabled
                on:click=move |_| actions.clear()
            >
                {CLEAR_LABEL}
            </button>
        </header>
    }
}

#[component]
fn CartRow(row: CartRowView, actions: CartActions) -> impl IntoView {
    let product_id = row.product_id;
    let quantity_ref = NodeRef::<html::Span>::new();

    // The stepper works from what is on screen, not from the cart state.
    let displayed = move || {
        quantity_ref
            .get()
            .map_or(0, |span| stepper::displayed_quantity(&span.inner_text()))
    };

    view! {
        <li class="cart-line" data-product-id=product_id.to_string()>
            <img src=row.image_src alt=row.image_alt />
            <div class="cart-line-details">
                <h4>{row.name}</h4>
                <span class="cart-line-price">{row.price}</span>
                <p class="cart-line-description">{row.description}</p>
            </div>
            <div class="cart-line-stepper">
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    aria-label="Decrease quantity"
                    on:click=move |_| actions.update(product_id, stepper::decrement(displayed()))
                >
                    "-"
                </button>
                <span class="cart-line-quantity" node_ref=quantity_ref>
                    {row.quantity}
                </span>
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    aria-label="Increase quantity"
                    on:click=move |_| actions.update(product_id, stepper::increment(displayed()))
                >
                    "+"
                </button>
            </div>
            <button
                type="button"
                class="btn btn-link cart-line-remove"
                on:click=move |_| actions.remove(product_id)
            >
                {REMOVE_LABEL}
            </button>
        </li>
    }
}

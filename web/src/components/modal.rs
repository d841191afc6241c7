//! Overlay host
//!
//! Stateless: visibility comes from `open`, and `on_close` is the only way out.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <button
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

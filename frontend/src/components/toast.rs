use leptos::*;

use crate::ui::Toaster;

/// Floating notification region, always mounted.
#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let icon = format!("bi {} me-2", toast.level.icon_class());
                    view! {
                        <div class="toast show" role="alert">
                            <div class="toast-header">
                                <i class=icon></i>
                                <strong class="me-auto">"Notification"</strong>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| toaster.dismiss(id)
                                ></button>
                            </div>
                            <div class="toast-body">{toast.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

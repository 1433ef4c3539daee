use leptos::*;

use crate::services::theme::{DocumentTheme, LocalThemeStore, ThemeManager};
use crate::types::Theme;

#[component]
pub fn Header() -> impl IntoView {
    let (theme, set_theme) = create_signal(Theme::default());
    let themes = ThemeManager::new(LocalThemeStore, DocumentTheme::new(set_theme));

    // Runs while the app mounts, before the first paint.
    themes.restore();

    let on_toggle = move |_| {
        themes.toggle();
    };

    let icon_class = move |icon: &str, visible: bool| {
        if visible {
            format!("bi {}", icon)
        } else {
            format!("bi {} d-none", icon)
        }
    };

    view! {
        <nav class="navbar border-bottom mb-4">
            <div class="container">
                <span class="navbar-brand fw-semibold">
                    <i class="bi bi-database-gear me-2"></i>
                    "Dataset Converter"
                </span>
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm"
                    id="themeToggle"
                    title="Toggle theme"
                    on:click=on_toggle
                >
                    <i id="lightIcon" class=move || icon_class("bi-sun", !theme.get().shows_dark_icon())></i>
                    <i id="darkIcon" class=move || icon_class("bi-moon-stars", theme.get().shows_dark_icon())></i>
                </button>
            </div>
        </nav>
    }
}

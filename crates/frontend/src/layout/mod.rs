pub mod top_header;

use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас админ-панели: верхняя навигация и страница под ней.
/// Страница рендерится только при сохранённом токене.
#[component]
pub fn AdminShell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-shell">
            <TopHeader />
            <main class="app-main">
                <RequireAuth>{children()}</RequireAuth>
            </main>
        </div>
    }
}

use crate::domain::a001_clothes::ui::details::ClothesDetails;
use crate::domain::a001_clothes::ui::list::ClothesList;
use crate::domain::a002_look::ui::details::LookDetails;
use crate::domain::a002_look::ui::list::LookList;
use crate::layout::AdminShell;
use crate::showcase::gallery::Gallery;
use crate::showcase::look::LookShowcase;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Числовой id записи из сегмента URL
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Страница не найдена"</h1>
            <a href="/">"На главную"</a>
        </div>
    }
}

/// Reads `:id` from the route and re-renders when it changes
#[component]
fn WithRouteId<F>(render: F) -> impl IntoView
where
    F: Fn(i64) -> AnyView + Send + Sync + 'static,
{
    let params = use_params_map();
    move || match params.with(|p| parse_id(p.get("id").as_deref())) {
        Some(id) => render(id),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Gallery />
                <Route
                    path=path!("/looks/:id")
                    view=|| view! { <WithRouteId render=|id| view! { <LookShowcase id=id /> }.into_any() /> }
                />
                <Route path=path!("/admin/login") view=LoginPage />
                <Route
                    path=path!("/admin/looks")
                    view=|| view! { <AdminShell><LookList /></AdminShell> }
                />
                <Route
                    path=path!("/admin/looks/:id")
                    view=|| view! {
                        <AdminShell>
                            <WithRouteId render=|id| view! { <LookDetails id=id /> }.into_any() />
                        </AdminShell>
                    }
                />
                <Route
                    path=path!("/admin/clothes")
                    view=|| view! { <AdminShell><ClothesList /></AdminShell> }
                />
                <Route
                    path=path!("/admin/clothes/:id")
                    view=|| view! {
                        <AdminShell>
                            <WithRouteId render=|id| view! { <ClothesDetails id=id /> }.into_any() />
                        </AdminShell>
                    }
                />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("42")), Some(42));
        assert_eq!(parse_id(Some(" 7 ")), Some(7));
        assert_eq!(parse_id(Some("abc")), None);
        assert_eq!(parse_id(Some("0")), None);
        assert_eq!(parse_id(None), None);
    }
}

use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Signup => html! { <SignupPage /> },
        MainRoute::Dashboard => html! { <DashboardPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::MainRoute;
    use yew_router::Routable;

    /// Tests the page paths the app navigates between
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Signup.to_path(), "/signup");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests path recognition back into route variants
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/signup"), Some(MainRoute::Signup));
        assert_eq!(
            MainRoute::recognize("/dashboard"),
            Some(MainRoute::Dashboard)
        );
    }

    /// Unknown paths fall through to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            MainRoute::recognize("/does-not-exist"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests route equality and cloning
    #[test]
    fn test_route_equality() {
        let route1 = MainRoute::Login;
        let route2 = MainRoute::Login;
        assert_eq!(route1, route2);
        assert_ne!(MainRoute::Login, MainRoute::Signup);

        let cloned = route1.clone();
        assert_eq!(route1, cloned);
    }
}

//! Root application component with routing and explicit session
//! injection.
//!
//! ARCHITECTURE
//! ============
//! One [`AuthHandle`] is constructed here, bootstrapped once, and handed
//! to every page as a prop; pages never reach into ambient context for
//! the session.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::ai_assistant::AiAssistantPage;
use crate::pages::ai_consult::AiConsultPage;
use crate::pages::ai_ingredients::AiIngredientsPage;
use crate::pages::ai_photo::AiPhotoPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::public_recipes::PublicRecipesPage;
use crate::pages::recipe_detail::RecipeDetailPage;
use crate::pages::shopping_cart::ShoppingCartPage;
use crate::state::auth::AuthHandle;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthHandle::new();
    auth.init();

    let landing = {
        let auth = auth.clone();
        move || view! { <LandingPage auth=auth.clone()/> }
    };
    let login = {
        let auth = auth.clone();
        move || view! { <LoginPage auth=auth.clone()/> }
    };
    let public_recipes = {
        let auth = auth.clone();
        move || view! { <PublicRecipesPage auth=auth.clone()/> }
    };
    let recipe_detail = {
        let auth = auth.clone();
        move || view! { <RecipeDetailPage auth=auth.clone()/> }
    };
    let cart = {
        let auth = auth.clone();
        move || view! { <ShoppingCartPage auth=auth.clone()/> }
    };
    let ai_hub = {
        let auth = auth.clone();
        move || view! { <AiAssistantPage auth=auth.clone()/> }
    };
    let ai_consult = {
        let auth = auth.clone();
        move || view! { <AiConsultPage auth=auth.clone()/> }
    };
    let ai_ingredients = {
        let auth = auth.clone();
        move || view! { <AiIngredientsPage auth=auth.clone()/> }
    };
    let ai_photo = {
        let auth = auth.clone();
        move || view! { <AiPhotoPage auth=auth.clone()/> }
    };

    view! {
        <Title text="Receptář"/>

        <Router>
            <Routes fallback=|| "Stránka nenalezena.".into_view()>
                <Route path=StaticSegment("") view=landing/>
                <Route path=StaticSegment("login") view=login/>
                <Route path=StaticSegment("recipes") view=public_recipes/>
                <Route path=(StaticSegment("recipes"), ParamSegment("id")) view=recipe_detail/>
                <Route path=StaticSegment("cart") view=cart/>
                <Route path=StaticSegment("ai") view=ai_hub/>
                <Route path=(StaticSegment("ai"), StaticSegment("consult")) view=ai_consult/>
                <Route path=(StaticSegment("ai"), StaticSegment("ingredients")) view=ai_ingredients/>
                <Route path=(StaticSegment("ai"), StaticSegment("photo")) view=ai_photo/>
            </Routes>
        </Router>
    }
}

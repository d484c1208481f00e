use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{
    about::AboutPage,
    home::Home,
    services::{DealershipServices, FleetServices, RockChipRepair},
};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <p class="p-8">"404 – not found"</p> }>
        <Route path=path!("")                     view=Home               />
        <Route path=path!("/about")               view=AboutPage          />
        <Route path=path!("/services")            view=RockChipRepair     />
        <Route path=path!("/dealership-services") view=DealershipServices />
        <Route path=path!("/fleet-services")      view=FleetServices      />
      </Routes>
    }
}

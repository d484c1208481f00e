use leptos::*;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use crate::components::contact::ContactSection;
use crate::components::header::Header;
use crate::routes::RoutesMenu;
use leptos_router::components::Router;

use leptos_meta::Stylesheet;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Router>
        <Stylesheet id="main" href="/assets/css/main.css"/>
        <Title text="Omaha Auto Glass Repair"/>

        <Header/>

        <main class="min-h-screen">
          <RoutesMenu/>
        </main>

        <ContactSection/>

        <footer class="bg-muted/30 text-muted-foreground py-8">
          <div class="container mx-auto px-4 flex flex-col sm:flex-row justify-between gap-8">
            <p>"© 2026 Omaha Auto Glass Repair — serving the Omaha metro."</p>
            <nav class="flex gap-6 underline-offset-4">
              <a href="/about">"About"</a>
              <a href="#contact">"Contact"</a>
            </nav>
          </div>
        </footer>
      </Router>
    }
}
